//! CrediShield core library: decision-support derivation for
//! explainable credit-risk assessments, plus prediction logging,
//! aggregate analytics, and an analyst review queue.
//!
//! The scoring model and its attribution engine live in an external
//! service; this crate consumes their output (a PD plus per-feature
//! reason codes) and derives everything the dashboard renders around
//! it.

pub mod analytics;
pub mod cases;
pub mod config;
pub mod error;
pub mod explain;
pub mod telemetry;
