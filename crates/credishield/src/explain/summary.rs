use super::domain::Prediction;
use super::locale::{Localizer, Phrase};

/// Render the top `count` risk-increasing feature labels as one joined
/// string for compact table display. The upstream service already
/// sorts the list by magnitude.
pub fn top_factors(
    prediction: Option<&Prediction>,
    count: usize,
    localizer: &dyn Localizer,
) -> String {
    let codes = match prediction {
        Some(prediction) if prediction.usable() => &prediction.top_risk_increasing,
        _ => return localizer.phrase(Phrase::NotApplicable),
    };

    if codes.is_empty() {
        return localizer.phrase(Phrase::NotApplicable);
    }

    codes
        .iter()
        .take(count)
        .map(|code| localizer.label(&code.feature))
        .collect::<Vec<_>>()
        .join(", ")
}
