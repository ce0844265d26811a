use crate::explain::{ApplicantForm, Prediction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prediction to be appended to the log, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPredictionLog {
    pub timestamp: DateTime<Utc>,
    pub model_version: String,
    pub input: ApplicantForm,
    pub prediction: Prediction,
}

/// One logged prediction with its repository-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionLogEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub model_version: String,
    pub input: ApplicantForm,
    pub prediction: Prediction,
}

impl PredictionLogEntry {
    pub fn pd_score(&self) -> f64 {
        self.prediction.probability_of_default
    }
}

/// Storage abstraction so the analytics rollups and the service module
/// can be exercised in isolation. The shipped implementation is
/// in-memory; a database-backed one slots in without touching callers.
pub trait PredictionLogRepository: Send + Sync {
    fn append(&self, entry: NewPredictionLog) -> Result<PredictionLogEntry, RepositoryError>;
    fn all(&self) -> Result<Vec<PredictionLogEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("prediction log unavailable: {0}")]
    Unavailable(String),
}
