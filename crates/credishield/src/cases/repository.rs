use super::domain::CaseStatus;
use crate::explain::{ApplicantForm, Prediction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Case to be stored, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCaseRecord {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: CaseStatus,
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub applicant: ApplicantForm,
    pub prediction: Option<Prediction>,
    pub analyst_notes: Option<String>,
    pub admin_override_reason: Option<String>,
}

/// One stored case with its repository-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub applicant: ApplicantForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_override_reason: Option<String>,
}

/// Storage abstraction so the case workflow can be exercised in
/// isolation. The shipped implementation is in-memory; a
/// database-backed one slots in without touching callers.
pub trait CaseRepository: Send + Sync {
    fn create(&self, case: NewCaseRecord) -> Result<CaseRecord, CaseRepositoryError>;
    fn update(&self, record: CaseRecord) -> Result<(), CaseRepositoryError>;
    fn fetch(&self, id: u64) -> Result<Option<CaseRecord>, CaseRepositoryError>;
    fn all(&self) -> Result<Vec<CaseRecord>, CaseRepositoryError>;
}

/// Error enumeration for case store failures.
#[derive(Debug, thiserror::Error)]
pub enum CaseRepositoryError {
    #[error("case not found")]
    NotFound,
    #[error("case store unavailable: {0}")]
    Unavailable(String),
}
