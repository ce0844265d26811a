use super::config::DerivationConfig;
use super::domain::{ApplicantForm, Prediction};
use super::locale::{Localizer, Phrase};
use super::views::RankedActionView;

/// Compute the three hypothetical adjustments with estimated PD deltas,
/// sorted descending by impact.
///
/// The deltas are closed-form display heuristics, not re-invocations of
/// the scoring model. A live what-if re-score goes through the external
/// simulation endpoint instead.
pub fn rank(
    _form: &ApplicantForm,
    prediction: Option<&Prediction>,
    localizer: &dyn Localizer,
    config: &DerivationConfig,
) -> Vec<RankedActionView> {
    let prediction = match prediction {
        Some(prediction) if prediction.usable() => prediction,
        _ => return Vec::new(),
    };

    let pd = prediction.probability_of_default;
    let candidates = [
        (Phrase::ActionReduceAmount, config.amount_action_delta),
        (Phrase::ActionShortenTerm, config.term_action_delta),
        (Phrase::ActionImproveBalances, config.balances_action_delta),
    ];
    let mut actions: Vec<RankedActionView> = candidates
        .iter()
        .map(|(phrase, estimator)| {
            let delta = estimator.estimate(pd);
            RankedActionView {
                rank: 0,
                action: localizer.phrase(*phrase),
                delta,
                estimated_pd: (pd - delta).max(0.0),
            }
        })
        .collect();

    actions.sort_by(|a, b| b.delta.total_cmp(&a.delta));
    for (index, action) in actions.iter_mut().enumerate() {
        action.rank = index as u8 + 1;
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::super::config::ActionDelta;
    use super::super::locale::Locale;
    use super::*;

    fn prediction(pd: f64) -> Prediction {
        Prediction {
            probability_of_default: pd,
            top_risk_increasing: Vec::new(),
            top_risk_decreasing: Vec::new(),
        }
    }

    fn rank_default(prediction: Option<&Prediction>) -> Vec<RankedActionView> {
        rank(
            &ApplicantForm::new(),
            prediction,
            Locale::En.localizer(),
            &DerivationConfig::default(),
        )
    }

    #[test]
    fn no_prediction_yields_no_actions() {
        assert!(rank_default(None).is_empty());
    }

    #[test]
    fn actions_are_sorted_ranked_and_bounded() {
        for pd in [0.0, 0.05, 0.3, 0.62, 1.0] {
            let sample = prediction(pd);
            let actions = rank_default(Some(&sample));

            assert_eq!(actions.len(), 3);
            for (index, action) in actions.iter().enumerate() {
                assert_eq!(action.rank, index as u8 + 1);
                assert!(action.estimated_pd <= pd);
                assert!(action.estimated_pd >= 0.0);
                if index > 0 {
                    assert!(actions[index - 1].delta >= action.delta);
                }
            }
        }
    }

    #[test]
    fn reference_scenario_caps_the_amount_delta() {
        let sample = prediction(0.62);
        let actions = rank_default(Some(&sample));

        // 0.62 * 0.18 exceeds the 0.08 ceiling.
        assert!((actions[0].delta - 0.08).abs() < 1e-12);
        assert!((actions[0].estimated_pd - 0.54).abs() < 1e-12);
        assert_eq!(actions[0].action, "Reduce the loan amount by about 10%");
    }

    #[test]
    fn low_pd_keeps_deltas_proportional() {
        let sample = prediction(0.1);
        let actions = rank_default(Some(&sample));

        // None of the fractions reach their ceilings at pd 0.1.
        assert!((actions[0].delta - 0.018).abs() < 1e-12);
        assert!((actions[1].delta - 0.014).abs() < 1e-12);
        assert!((actions[2].delta - 0.010).abs() < 1e-12);
    }

    #[test]
    fn configured_deltas_reshuffle_the_ranking() {
        let mut config = DerivationConfig::default();
        config.balances_action_delta = ActionDelta {
            ceiling: 0.2,
            fraction: 0.5,
        };

        let sample = prediction(0.62);
        let actions = rank(
            &ApplicantForm::new(),
            Some(&sample),
            Locale::En.localizer(),
            &config,
        );

        // The boosted balances action now outranks the amount reduction.
        assert_eq!(actions[0].action, "Improve your savings or checking tier");
        assert!((actions[0].delta - 0.2).abs() < 1e-12);
        assert!((actions[0].estimated_pd - 0.42).abs() < 1e-12);
        assert_eq!(actions[0].rank, 1);
    }
}
