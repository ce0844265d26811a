use credishield::analytics::{
    NewPredictionLog, PredictionLogEntry, PredictionLogRepository, RepositoryError,
};
use credishield::cases::{CaseRecord, CaseRepository, CaseRepositoryError, NewCaseRecord};
use credishield::explain::Locale;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory prediction log backing the service until a durable store
/// is wired in. Ids are assigned monotonically per process.
#[derive(Default)]
pub(crate) struct InMemoryPredictionLog {
    entries: Mutex<Vec<PredictionLogEntry>>,
    sequence: AtomicU64,
}

impl PredictionLogRepository for InMemoryPredictionLog {
    fn append(&self, entry: NewPredictionLog) -> Result<PredictionLogEntry, RepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = PredictionLogEntry {
            id,
            timestamp: entry.timestamp,
            model_version: entry.model_version,
            input: entry.input,
            prediction: entry.prediction,
        };

        let mut guard = self.entries.lock().expect("prediction log mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<PredictionLogEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("prediction log mutex poisoned");
        Ok(guard.clone())
    }
}

/// In-memory case store for the analyst review queue. Ids are assigned
/// monotonically per process, matching the prediction log.
#[derive(Default)]
pub(crate) struct InMemoryCaseStore {
    records: Mutex<Vec<CaseRecord>>,
    sequence: AtomicU64,
}

impl CaseRepository for InMemoryCaseStore {
    fn create(&self, case: NewCaseRecord) -> Result<CaseRecord, CaseRepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = CaseRecord {
            id,
            created_at: case.created_at,
            updated_at: case.updated_at,
            status: case.status,
            assigned_to: case.assigned_to,
            created_by: case.created_by,
            applicant: case.applicant,
            prediction: case.prediction,
            analyst_notes: case.analyst_notes,
            admin_override_reason: case.admin_override_reason,
        };

        let mut guard = self.records.lock().expect("case store mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: CaseRecord) -> Result<(), CaseRepositoryError> {
        let mut guard = self.records.lock().expect("case store mutex poisoned");
        match guard.iter_mut().find(|stored| stored.id == record.id) {
            Some(stored) => {
                *stored = record;
                Ok(())
            }
            None => Err(CaseRepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: u64) -> Result<Option<CaseRecord>, CaseRepositoryError> {
        let guard = self.records.lock().expect("case store mutex poisoned");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<CaseRecord>, CaseRepositoryError> {
        let guard = self.records.lock().expect("case store mutex poisoned");
        Ok(guard.clone())
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "en" => Ok(Locale::En),
        "hi" => Ok(Locale::Hi),
        other => Err(format!("unsupported locale '{other}' (expected en or hi)")),
    }
}
