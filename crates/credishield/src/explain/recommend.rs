use super::config::DerivationConfig;
use super::domain::{numeric_field, ApplicantForm, Prediction};
use super::glossary;
use super::locale::{Localizer, Phrase};
use std::collections::BTreeSet;

/// Derive a bounded, deduplicated list of actionable tips from the
/// features that are currently pushing risk up.
///
/// Tip order follows the fixed rule-trigger order below, not
/// attribution magnitude. That is a simplicity-over-precision choice;
/// reorder here if magnitude-ranked tips are ever wanted.
pub fn generate(
    form: &ApplicantForm,
    prediction: Option<&Prediction>,
    localizer: &dyn Localizer,
    config: &DerivationConfig,
) -> Vec<String> {
    let prediction = match prediction {
        Some(prediction) if prediction.usable() => prediction,
        _ => return Vec::new(),
    };

    let risk_increasing: BTreeSet<&str> = prediction
        .top_risk_increasing
        .iter()
        .map(|code| glossary::canonical(&code.feature))
        .collect();

    let mut tips: Vec<String> = Vec::new();

    if risk_increasing.contains("credit_amount") {
        let current = numeric_field(form, "credit_amount").unwrap_or(0.0);
        let target = ((current * config.amount_scale).round() as u64).max(config.minimum_amount);
        let amount = localizer.group_number(target);
        tips.push(localizer.phrase(Phrase::TipReduceAmount { amount: &amount }));
    }

    if risk_increasing.contains("duration") {
        let current = numeric_field(form, "duration").unwrap_or(0.0);
        let months =
            ((current - config.duration_step as f64).max(config.minimum_duration as f64)) as u64;
        tips.push(localizer.phrase(Phrase::TipShortenDuration { months }));
    }

    if risk_increasing.contains("installment_commitment") {
        tips.push(localizer.phrase(Phrase::TipRebalanceInstallment));
    }

    // Savings and checking tiers share one tip text; the dedup pass
    // below keeps it single when both trigger.
    if risk_increasing.contains("savings_status") {
        tips.push(localizer.phrase(Phrase::TipImproveBalances));
    }

    if risk_increasing.contains("checking_status") {
        tips.push(localizer.phrase(Phrase::TipImproveBalances));
    }

    if risk_increasing.contains("purpose") {
        tips.push(localizer.phrase(Phrase::TipSaferPurpose));
    }

    tips.push(localizer.phrase(Phrase::TipRunSimulation));

    let mut seen = BTreeSet::new();
    tips.retain(|tip| seen.insert(tip.clone()));
    tips.truncate(config.recommendation_cap);
    tips
}
