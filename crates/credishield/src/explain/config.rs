use serde::{Deserialize, Serialize};

/// Knobs for the derivation heuristics. The defaults are the tuned
/// values the dashboard ships with; they are surfaced as configuration
/// because the confidence weights and what-if deltas are deliberate
/// approximations, not model outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Weight of the decision-boundary margin in the confidence score.
    pub margin_weight: f64,
    /// Weight of top-two factor concentration in the confidence score.
    pub concentration_weight: f64,
    /// Confidence score at or above which the band is High.
    pub high_band_threshold: f64,
    /// Confidence score at or above which the band is Medium.
    pub medium_band_threshold: f64,
    /// Multiplier applied to the loan amount in reduction suggestions.
    pub amount_scale: f64,
    /// Smallest loan amount a suggestion may propose.
    pub minimum_amount: u64,
    /// Months removed from the tenor in shortening suggestions.
    pub duration_step: u64,
    /// Shortest tenor a suggestion may propose, in months.
    pub minimum_duration: u64,
    /// Fixed PD reduction assumed by the counterfactual example.
    pub counterfactual_pd_offset: f64,
    /// Upper bound on the number of recommendations returned.
    pub recommendation_cap: usize,
    /// Delta ceiling and PD fraction for the amount-reduction action.
    pub amount_action_delta: ActionDelta,
    /// Delta ceiling and PD fraction for the term-shortening action.
    pub term_action_delta: ActionDelta,
    /// Delta ceiling and PD fraction for the balances-improvement action.
    pub balances_action_delta: ActionDelta,
}

/// Closed-form estimate for one ranked action: the delta is the PD
/// times `fraction`, never exceeding `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionDelta {
    pub ceiling: f64,
    pub fraction: f64,
}

impl ActionDelta {
    pub fn estimate(&self, pd: f64) -> f64 {
        (pd * self.fraction).min(self.ceiling)
    }
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            margin_weight: 0.65,
            concentration_weight: 0.35,
            high_band_threshold: 0.72,
            medium_band_threshold: 0.48,
            amount_scale: 0.9,
            minimum_amount: 250,
            duration_step: 6,
            minimum_duration: 6,
            counterfactual_pd_offset: 0.07,
            recommendation_cap: 5,
            amount_action_delta: ActionDelta {
                ceiling: 0.08,
                fraction: 0.18,
            },
            term_action_delta: ActionDelta {
                ceiling: 0.06,
                fraction: 0.14,
            },
            balances_action_delta: ActionDelta {
                ceiling: 0.05,
                fraction: 0.10,
            },
        }
    }
}
