use super::domain::{numeric_field, ApplicantForm, Prediction, ReasonCode};
use super::locale::{Localizer, Phrase};

/// Compose a short natural-language explanation of the prediction.
/// Pure string assembly; returns the empty string when there is no
/// usable prediction.
pub fn narrate(
    form: &ApplicantForm,
    prediction: Option<&Prediction>,
    localizer: &dyn Localizer,
) -> String {
    let prediction = match prediction {
        Some(prediction) if prediction.usable() => prediction,
        _ => return String::new(),
    };

    let pd_pct = format!("{:.1}", prediction.probability_of_default * 100.0);
    let increasing = joined_labels(&prediction.top_risk_increasing, localizer);
    let decreasing = joined_labels(&prediction.top_risk_decreasing, localizer);

    let amount = numeric_field(form, "credit_amount")
        .map(|value| localizer.group_number(value.round().max(0.0) as u64))
        .unwrap_or_else(|| localizer.phrase(Phrase::NotApplicable));
    let months = numeric_field(form, "duration")
        .map(|value| (value.round().max(0.0) as u64).to_string())
        .unwrap_or_else(|| localizer.phrase(Phrase::NotApplicable));

    localizer.phrase(Phrase::Narrative {
        pd_pct: &pd_pct,
        increasing: &increasing,
        decreasing: &decreasing,
        amount: &amount,
        months: &months,
    })
}

fn joined_labels(codes: &[ReasonCode], localizer: &dyn Localizer) -> String {
    if codes.is_empty() {
        return localizer.phrase(Phrase::NotApplicable);
    }

    codes
        .iter()
        .take(2)
        .map(|code| localizer.label(&code.feature))
        .collect::<Vec<_>>()
        .join(", ")
}
