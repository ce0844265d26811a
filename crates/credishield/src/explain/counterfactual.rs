use super::config::DerivationConfig;
use super::domain::{numeric_field, ApplicantForm, Prediction};
use super::locale::{Localizer, Phrase};
use super::views::CounterfactualView;

/// Compute one concrete "what would change the outcome" example with
/// adjusted inputs and an estimated resulting PD. Absent when there is
/// no usable prediction.
///
/// The PD offset is a fixed display heuristic, independent of the other
/// factors; it is not a re-evaluation of the scoring model.
pub fn build(
    form: &ApplicantForm,
    prediction: Option<&Prediction>,
    localizer: &dyn Localizer,
    config: &DerivationConfig,
) -> Option<CounterfactualView> {
    let prediction = match prediction {
        Some(prediction) if prediction.usable() => prediction,
        _ => return None,
    };

    let current_amount = numeric_field(form, "credit_amount").unwrap_or(0.0);
    let current_duration = numeric_field(form, "duration").unwrap_or(0.0);

    let new_amount =
        ((current_amount * config.amount_scale).round() as u64).max(config.minimum_amount);
    let new_duration = ((current_duration - config.duration_step as f64)
        .max(config.minimum_duration as f64)) as u64;
    let new_pd = (prediction.probability_of_default - config.counterfactual_pd_offset).max(0.0);

    let amount = localizer.group_number(new_amount);
    let pd_pct = format!("{:.1}", new_pd * 100.0);
    let text = localizer.phrase(Phrase::Counterfactual {
        amount: &amount,
        months: new_duration,
        pd_pct: &pd_pct,
    });

    Some(CounterfactualView { text, new_pd })
}
