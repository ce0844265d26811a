use std::sync::Arc;

use super::config::DerivationConfig;
use super::domain::{ApplicantForm, Prediction};
use super::locale::Locale;
use super::views::DecisionSupportView;
use super::ExplanationEngine;
use crate::analytics::{
    self, AnalyticsSummary, AuditLogPage, ExportError, FairnessDiagnostics, NewPredictionLog,
    PredictionLogRepository, RepositoryError,
};
use chrono::Utc;
use serde::Deserialize;

/// One dashboard explain call: the applicant form plus the prediction
/// the dashboard obtained from the scoring service. The prediction is
/// optional so the panel can render its neutral state before any
/// assessment has run.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    pub applicant: ApplicantForm,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub locale: Locale,
}

/// Service composing the derivation engine and the prediction log.
pub struct ExplanationService<R> {
    engine: ExplanationEngine,
    repository: Arc<R>,
    model_version: String,
}

impl<R> ExplanationService<R>
where
    R: PredictionLogRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: DerivationConfig, model_version: String) -> Self {
        Self {
            engine: ExplanationEngine::new(config),
            repository,
            model_version,
        }
    }

    pub fn engine(&self) -> &ExplanationEngine {
        &self.engine
    }

    /// Derive the full decision-support panel, logging the prediction
    /// when one is present. Derivation itself cannot fail; only the
    /// log append can.
    pub fn explain(
        &self,
        request: ExplainRequest,
    ) -> Result<DecisionSupportView, ExplanationServiceError> {
        let ExplainRequest {
            applicant,
            prediction,
            locale,
        } = request;

        let view = self
            .engine
            .decision_support(&applicant, prediction.as_ref(), locale);

        if let Some(prediction) = prediction.filter(Prediction::usable) {
            self.repository.append(NewPredictionLog {
                timestamp: Utc::now(),
                model_version: self.model_version.clone(),
                input: applicant,
                prediction,
            })?;
        }

        Ok(view)
    }

    pub fn analytics(&self) -> Result<AnalyticsSummary, ExplanationServiceError> {
        let entries = self.repository.all()?;
        Ok(analytics::trends(&entries))
    }

    pub fn audit_logs(
        &self,
        limit: usize,
        offset: usize,
        purpose: Option<&str>,
    ) -> Result<AuditLogPage, ExplanationServiceError> {
        let entries = self.repository.all()?;
        Ok(analytics::page(&entries, limit, offset, purpose))
    }

    pub fn audit_csv(&self) -> Result<String, ExplanationServiceError> {
        let entries = self.repository.all()?;
        Ok(analytics::export_csv(&entries)?)
    }

    pub fn fairness(&self) -> Result<FairnessDiagnostics, ExplanationServiceError> {
        let entries = self.repository.all()?;
        Ok(analytics::fairness(&entries))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExplanationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
