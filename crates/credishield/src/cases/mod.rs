//! Analyst review queue. Applications flagged by the scoring flow are
//! opened as cases, paged through by status or assignee, and amended
//! with notes, reassignments, and override reasons as the review
//! progresses.

mod domain;
mod repository;
mod router;
mod service;

pub use domain::{CaseStatus, CaseUpdate, NewCase};
pub use repository::{CaseRecord, CaseRepository, CaseRepositoryError, NewCaseRecord};
pub use router::case_router;
pub use service::{queue, CaseQueuePage, CaseService, CaseServiceError, DEFAULT_QUEUE_LIMIT};
