use crate::explain::{ApplicantForm, Prediction};
use serde::{Deserialize, Serialize};

/// Lifecycle of a flagged application in the review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    New,
    UnderReview,
    Approved,
    Denied,
    Escalated,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::New => "new",
            CaseStatus::UnderReview => "under_review",
            CaseStatus::Approved => "approved",
            CaseStatus::Denied => "denied",
            CaseStatus::Escalated => "escalated",
        }
    }
}

/// Intake payload for opening a case from a scored application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCase {
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub applicant: ApplicantForm,
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

/// Partial update applied by an analyst. Absent fields keep their
/// current values; present fields replace them, including `Some("")`
/// style blanking via empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseUpdate {
    #[serde(default)]
    pub status: Option<CaseStatus>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub analyst_notes: Option<String>,
    #[serde(default)]
    pub admin_override_reason: Option<String>,
}

impl CaseUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.assigned_to.is_none()
            && self.analyst_notes.is_none()
            && self.admin_override_reason.is_none()
    }
}
