use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::domain::{CaseStatus, CaseUpdate, NewCase};
use super::repository::{CaseRecord, CaseRepository, CaseRepositoryError, NewCaseRecord};

pub const DEFAULT_QUEUE_LIMIT: usize = 50;

/// One page of the review queue, newest case first.
#[derive(Debug, Clone, Serialize)]
pub struct CaseQueuePage {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub count: usize,
    pub entries: Vec<CaseRecord>,
}

/// Paginate stored cases, newest first, optionally filtered by status
/// and assignee. `total` counts the filtered set so the dashboard can
/// page through it.
pub fn queue(
    records: &[CaseRecord],
    limit: usize,
    offset: usize,
    status: Option<CaseStatus>,
    assigned_to: Option<&str>,
) -> CaseQueuePage {
    let mut filtered: Vec<&CaseRecord> = records
        .iter()
        .filter(|record| match status {
            Some(status) => record.status == status,
            None => true,
        })
        .filter(|record| match assigned_to {
            Some(assignee) => record.assigned_to.as_deref() == Some(assignee),
            None => true,
        })
        .collect();
    filtered.sort_by(|a, b| b.id.cmp(&a.id));

    let total = filtered.len();
    let entries: Vec<CaseRecord> = filtered
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    CaseQueuePage {
        total,
        limit,
        offset,
        count: entries.len(),
        entries,
    }
}

/// Service coordinating the analyst review queue over a case store.
pub struct CaseService<C> {
    repository: Arc<C>,
}

impl<C> CaseService<C>
where
    C: CaseRepository + 'static,
{
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Open a new case in the queue. Every case starts in `new` with
    /// both timestamps set to the moment of creation.
    pub fn open(&self, intake: NewCase) -> Result<CaseRecord, CaseServiceError> {
        let now = Utc::now();
        let stored = self.repository.create(NewCaseRecord {
            created_at: now,
            updated_at: now,
            status: CaseStatus::New,
            assigned_to: intake.assigned_to,
            created_by: intake.created_by,
            applicant: intake.applicant,
            prediction: intake.prediction,
            analyst_notes: None,
            admin_override_reason: None,
        })?;
        Ok(stored)
    }

    pub fn list(
        &self,
        limit: usize,
        offset: usize,
        status: Option<CaseStatus>,
        assigned_to: Option<&str>,
    ) -> Result<CaseQueuePage, CaseServiceError> {
        let records = self.repository.all()?;
        Ok(queue(&records, limit, offset, status, assigned_to))
    }

    pub fn get(&self, id: u64) -> Result<CaseRecord, CaseServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(CaseRepositoryError::NotFound)?;
        Ok(record)
    }

    /// Apply an analyst's partial update. Only the provided fields
    /// change; `updated_at` is bumped whenever any field is present,
    /// and an empty update returns the current record untouched.
    pub fn amend(&self, id: u64, update: CaseUpdate) -> Result<CaseRecord, CaseServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(CaseRepositoryError::NotFound)?;

        if update.is_empty() {
            return Ok(record);
        }

        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(assignee) = update.assigned_to {
            record.assigned_to = Some(assignee);
        }
        if let Some(notes) = update.analyst_notes {
            record.analyst_notes = Some(notes);
        }
        if let Some(reason) = update.admin_override_reason {
            record.admin_override_reason = Some(reason);
        }
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        Ok(record)
    }
}

/// Error raised by the case service.
#[derive(Debug, thiserror::Error)]
pub enum CaseServiceError {
    #[error(transparent)]
    Repository(#[from] CaseRepositoryError),
}
