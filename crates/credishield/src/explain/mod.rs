//! Decision-support derivation layer. Takes a raw prediction (PD plus
//! per-feature attributions) and the applicant form, and derives the
//! panels the dashboard renders: confidence band, improvement tips,
//! narrative summary, ranked what-if actions, a counterfactual example,
//! and a compact top-factor string.
//!
//! Every derivation is a pure, total function of
//! `(form, prediction, locale)`. Missing or invalid predictions yield
//! defined neutral results, never errors; callers may invoke any of
//! these before a prediction exists.

pub mod actions;
pub mod confidence;
mod config;
pub mod counterfactual;
pub mod domain;
pub mod glossary;
pub mod locale;
pub mod narrative;
pub mod recommend;
mod router;
mod service;
pub mod summary;
mod views;

pub use config::{ActionDelta, DerivationConfig};
pub use domain::{numeric_field, text_field, ApplicantForm, FieldValue, Prediction, ReasonCode};
pub use locale::{Locale, Localizer, Phrase};
pub use router::explanation_router;
pub use service::{ExplainRequest, ExplanationService, ExplanationServiceError};
pub use views::{
    ConfidenceBand, ConfidenceView, CounterfactualView, DecisionSupportView, RankedActionView,
};

/// Features shown in the compact top-factor column; matches the
/// upstream attribution cap.
const TOP_FACTOR_COUNT: usize = 3;

/// Stateless engine applying the derivation heuristics to a prediction.
pub struct ExplanationEngine {
    config: DerivationConfig,
}

impl Default for ExplanationEngine {
    fn default() -> Self {
        Self::new(DerivationConfig::default())
    }
}

impl ExplanationEngine {
    pub fn new(config: DerivationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    pub fn confidence(&self, prediction: Option<&Prediction>, locale: Locale) -> ConfidenceView {
        confidence::estimate(prediction, locale.localizer(), &self.config)
    }

    pub fn recommendations(
        &self,
        form: &ApplicantForm,
        prediction: Option<&Prediction>,
        locale: Locale,
    ) -> Vec<String> {
        recommend::generate(form, prediction, locale.localizer(), &self.config)
    }

    pub fn narrative(
        &self,
        form: &ApplicantForm,
        prediction: Option<&Prediction>,
        locale: Locale,
    ) -> String {
        narrative::narrate(form, prediction, locale.localizer())
    }

    pub fn ranked_actions(
        &self,
        form: &ApplicantForm,
        prediction: Option<&Prediction>,
        locale: Locale,
    ) -> Vec<RankedActionView> {
        actions::rank(form, prediction, locale.localizer(), &self.config)
    }

    pub fn counterfactual(
        &self,
        form: &ApplicantForm,
        prediction: Option<&Prediction>,
        locale: Locale,
    ) -> Option<CounterfactualView> {
        counterfactual::build(form, prediction, locale.localizer(), &self.config)
    }

    pub fn top_factors(
        &self,
        prediction: Option<&Prediction>,
        count: usize,
        locale: Locale,
    ) -> String {
        summary::top_factors(prediction, count, locale.localizer())
    }

    /// Assemble the full panel the dashboard renders for one
    /// prediction. Each field is an independent derivation; there is no
    /// ordering dependency between them.
    pub fn decision_support(
        &self,
        form: &ApplicantForm,
        prediction: Option<&Prediction>,
        locale: Locale,
    ) -> DecisionSupportView {
        DecisionSupportView {
            confidence: self.confidence(prediction, locale),
            recommendations: self.recommendations(form, prediction, locale),
            narrative: self.narrative(form, prediction, locale),
            ranked_actions: self.ranked_actions(form, prediction, locale),
            counterfactual: self.counterfactual(form, prediction, locale),
            top_factors: self.top_factors(prediction, TOP_FACTOR_COUNT, locale),
        }
    }
}
