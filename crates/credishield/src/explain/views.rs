use serde::{Deserialize, Serialize};

/// Coarse categorical summary of how stable a prediction is judged to
/// be by the confidence heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
    Unknown,
}

impl ConfidenceBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceView {
    pub band: ConfidenceBand,
    pub score: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedActionView {
    pub rank: u8,
    pub action: String,
    pub delta: f64,
    pub estimated_pd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualView {
    pub text: String,
    pub new_pd: f64,
}

/// Assembled decision-support panel, one derivation call per field.
/// Created fresh for every prediction and discarded once rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSupportView {
    pub confidence: ConfidenceView,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranked_actions: Vec<RankedActionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterfactual: Option<CounterfactualView>,
    pub top_factors: String,
}
