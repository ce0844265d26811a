//! Prediction logging and aggregate analytics: the audit trail behind
//! the dashboard's analytics, audit-log, and fairness panels. Storage
//! sits behind [`PredictionLogRepository`]; rollups are pure functions
//! over the logged entries.

mod audit;
mod repository;
mod rollup;

pub use audit::{export_csv, page, AuditLogEntryView, AuditLogPage, ExportError, DEFAULT_PAGE_LIMIT};
pub use repository::{
    NewPredictionLog, PredictionLogEntry, PredictionLogRepository, RepositoryError,
};
pub use rollup::{
    fairness, trends, AnalyticsSummary, FairnessDiagnostics, GroupMetric, TrendPoint,
    HIGH_RISK_THRESHOLD,
};
