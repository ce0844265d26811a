use super::repository::PredictionLogEntry;
use crate::explain::{numeric_field, text_field, ApplicantForm};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_PAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogEntryView {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub pd_score: f64,
    pub model_version: String,
    pub input_payload: ApplicantForm,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub count: usize,
    pub entries: Vec<AuditLogEntryView>,
}

/// Paginate the prediction log, newest first, optionally filtered to
/// one loan purpose. `total` counts the filtered set so the dashboard
/// can page through it.
pub fn page(
    entries: &[PredictionLogEntry],
    limit: usize,
    offset: usize,
    purpose: Option<&str>,
) -> AuditLogPage {
    let mut filtered: Vec<&PredictionLogEntry> = entries
        .iter()
        .filter(|entry| match purpose {
            Some(purpose) => {
                text_field(&entry.input, "purpose").as_deref() == Some(purpose)
            }
            None => true,
        })
        .collect();
    filtered.sort_by(|a, b| b.id.cmp(&a.id));

    let total = filtered.len();
    let views: Vec<AuditLogEntryView> = filtered
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|entry| AuditLogEntryView {
            id: entry.id,
            timestamp: entry.timestamp,
            pd_score: entry.pd_score(),
            model_version: entry.model_version.clone(),
            input_payload: entry.input.clone(),
        })
        .collect();

    AuditLogPage {
        total,
        limit,
        offset,
        count: views.len(),
        entries: views,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer could not be recovered: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv buffer was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render the full prediction log as CSV for analyst download, newest
/// first. Columns mirror the dashboard's audit table.
pub fn export_csv(entries: &[PredictionLogEntry]) -> Result<String, ExportError> {
    let mut sorted: Vec<&PredictionLogEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "timestamp",
        "model_version",
        "pd_score",
        "purpose",
        "credit_amount",
        "duration",
    ])?;

    for entry in sorted {
        writer.write_record([
            entry.id.to_string(),
            entry.timestamp.to_rfc3339(),
            entry.model_version.clone(),
            format!("{:.4}", entry.pd_score()),
            text_field(&entry.input, "purpose").unwrap_or_default(),
            numeric_field(&entry.input, "credit_amount")
                .map(|value| value.to_string())
                .unwrap_or_default(),
            numeric_field(&entry.input, "duration")
                .map(|value| value.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let buffer = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(buffer)?)
}
