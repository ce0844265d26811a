use super::config::DerivationConfig;
use super::domain::Prediction;
use super::locale::{Localizer, Phrase};
use super::views::{ConfidenceBand, ConfidenceView};

/// Derive a categorical confidence band and numeric score for a
/// prediction. Total over its domain: an absent or non-numeric
/// prediction yields the Unknown band instead of an error.
pub fn estimate(
    prediction: Option<&Prediction>,
    localizer: &dyn Localizer,
    config: &DerivationConfig,
) -> ConfidenceView {
    let prediction = match prediction {
        Some(prediction) if prediction.usable() => prediction,
        _ => {
            return ConfidenceView {
                band: ConfidenceBand::Unknown,
                score: 0.0,
                rationale: localizer.phrase(Phrase::ConfidenceUnknown),
            }
        }
    };

    let pd = prediction.probability_of_default;
    // Distance from the 0.5 decision boundary, normalized to [0, 1].
    let margin = ((pd - 0.5).abs() * 2.0).min(1.0);

    let magnitudes = prediction.impact_magnitudes();
    let total_impact: f64 = magnitudes.iter().sum();
    let top_two: f64 = magnitudes.iter().take(2).sum();
    // Neutral default when there are zero or one attributions.
    let top_share = if total_impact > 0.0 {
        top_two / total_impact
    } else {
        0.5
    };

    let score = config.margin_weight * margin + config.concentration_weight * top_share;

    let (band, rationale) = if score >= config.high_band_threshold {
        (ConfidenceBand::High, Phrase::ConfidenceHigh)
    } else if score >= config.medium_band_threshold {
        (ConfidenceBand::Medium, Phrase::ConfidenceMedium)
    } else {
        (ConfidenceBand::Low, Phrase::ConfidenceLow)
    };

    ConfidenceView {
        band,
        score,
        rationale: localizer.phrase(rationale),
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::ReasonCode;
    use super::super::locale::Locale;
    use super::*;

    fn prediction(pd: f64, increasing: &[(&str, f64)], decreasing: &[(&str, f64)]) -> Prediction {
        Prediction {
            probability_of_default: pd,
            top_risk_increasing: increasing
                .iter()
                .map(|(feature, impact)| ReasonCode {
                    feature: feature.to_string(),
                    impact: *impact,
                })
                .collect(),
            top_risk_decreasing: decreasing
                .iter()
                .map(|(feature, impact)| ReasonCode {
                    feature: feature.to_string(),
                    impact: *impact,
                })
                .collect(),
        }
    }

    fn estimate_default(prediction: Option<&Prediction>) -> ConfidenceView {
        estimate(
            prediction,
            Locale::En.localizer(),
            &DerivationConfig::default(),
        )
    }

    #[test]
    fn missing_prediction_is_unknown() {
        let view = estimate_default(None);
        assert_eq!(view.band, ConfidenceBand::Unknown);
        assert_eq!(view.score, 0.0);
        assert!(!view.rationale.is_empty());
    }

    #[test]
    fn nan_pd_is_treated_as_missing() {
        let sample = prediction(f64::NAN, &[("duration", 0.1)], &[]);
        let view = estimate_default(Some(&sample));
        assert_eq!(view.band, ConfidenceBand::Unknown);
    }

    #[test]
    fn boundary_pd_without_attributions_scores_low() {
        let sample = prediction(0.5, &[], &[]);
        let view = estimate_default(Some(&sample));
        // margin 0, neutral top share 0.5: score = 0.35 * 0.5.
        assert!((view.score - 0.175).abs() < 1e-12);
        assert_eq!(view.band, ConfidenceBand::Low);
    }

    #[test]
    fn extreme_pd_with_concentrated_factors_scores_high() {
        for pd in [0.0, 1.0] {
            let sample = prediction(pd, &[("credit_amount", 0.2), ("duration", 0.1)], &[]);
            let view = estimate_default(Some(&sample));
            assert!((view.score - 1.0).abs() < 1e-12);
            assert_eq!(view.band, ConfidenceBand::High);
        }
    }

    #[test]
    fn reference_scenario_lands_in_medium() {
        let sample = prediction(
            0.62,
            &[("credit_amount", 0.15), ("duration", 0.08)],
            &[],
        );
        let view = estimate_default(Some(&sample));
        // margin 0.24, top share 1.0: 0.65*0.24 + 0.35.
        assert!((view.score - 0.506).abs() < 1e-12);
        assert_eq!(view.band, ConfidenceBand::Medium);
    }
}
