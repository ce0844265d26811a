use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signed contribution of one input feature to the model's output.
///
/// The upstream attribution engine emits at most one reason code per
/// feature, split across the risk-increasing and risk-decreasing lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCode {
    pub feature: String,
    pub impact: f64,
}

/// Output of the external scoring service, consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub probability_of_default: f64,
    #[serde(default)]
    pub top_risk_increasing: Vec<ReasonCode>,
    #[serde(default)]
    pub top_risk_decreasing: Vec<ReasonCode>,
}

impl Prediction {
    /// A prediction is only usable when its PD is an actual number.
    /// Non-finite values are treated exactly like a missing prediction
    /// so invalid data can never reach a rendered percentage.
    pub fn usable(&self) -> bool {
        self.probability_of_default.is_finite()
    }

    /// Absolute impact magnitudes across both attribution lists,
    /// sorted descending.
    pub(crate) fn impact_magnitudes(&self) -> Vec<f64> {
        let mut magnitudes: Vec<f64> = self
            .top_risk_increasing
            .iter()
            .chain(self.top_risk_decreasing.iter())
            .map(|code| code.impact.abs())
            .filter(|magnitude| magnitude.is_finite())
            .collect();
        magnitudes.sort_by(|a, b| b.total_cmp(a));
        magnitudes
    }
}

/// Raw applicant attribute value as collected by the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

/// Applicant attributes keyed by feature identifier. Treated as
/// read-only input; derivations copy values instead of mutating.
pub type ApplicantForm = BTreeMap<String, FieldValue>;

/// Numeric view of a form field. Numeric strings are accepted because
/// the intake layer serializes select widgets as text.
pub fn numeric_field(form: &ApplicantForm, key: &str) -> Option<f64> {
    match form.get(key) {
        Some(FieldValue::Number(value)) if value.is_finite() => Some(*value),
        Some(FieldValue::Text(raw)) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Text view of a form field, used by the analytics group-bys.
pub fn text_field(form: &ApplicantForm, key: &str) -> Option<String> {
    match form.get(key) {
        Some(FieldValue::Text(raw)) => Some(raw.clone()),
        Some(FieldValue::Number(value)) => Some(value.to_string()),
        None => None,
    }
}
