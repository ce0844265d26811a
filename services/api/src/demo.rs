use clap::Args;
use credishield::error::AppError;
use credishield::explain::{
    ApplicantForm, DerivationConfig, ExplanationEngine, FieldValue, Locale, Prediction, ReasonCode,
};

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Locale for labels and phrases (en or hi)
    #[arg(long, default_value = "en", value_parser = crate::infra::parse_locale)]
    pub(crate) locale: Locale,
    /// Requested loan amount
    #[arg(long, default_value_t = 5000)]
    pub(crate) amount: u64,
    /// Loan duration in months
    #[arg(long, default_value_t = 24)]
    pub(crate) duration: u64,
    /// Probability of default reported by the scoring service
    #[arg(long, default_value_t = 0.62)]
    pub(crate) pd: f64,
}

/// Terminal walkthrough of the panel the dashboard renders, using a
/// canned attribution set so it works without the scoring service.
pub(crate) fn run_explain_demo(args: ExplainArgs) -> Result<(), AppError> {
    let ExplainArgs {
        locale,
        amount,
        duration,
        pd,
    } = args;

    let mut form = ApplicantForm::new();
    form.insert(
        "credit_amount".to_string(),
        FieldValue::Number(amount as f64),
    );
    form.insert("duration".to_string(), FieldValue::Number(duration as f64));
    form.insert("purpose".to_string(), FieldValue::Text("car".to_string()));

    let prediction = Prediction {
        probability_of_default: pd,
        top_risk_increasing: vec![
            ReasonCode {
                feature: "credit_amount".to_string(),
                impact: 0.15,
            },
            ReasonCode {
                feature: "duration".to_string(),
                impact: 0.08,
            },
        ],
        top_risk_decreasing: vec![ReasonCode {
            feature: "savings_status".to_string(),
            impact: -0.05,
        }],
    };

    let engine = ExplanationEngine::new(DerivationConfig::default());
    let panel = engine.decision_support(&form, Some(&prediction), locale);

    println!("Decision support demo (pd {:.2})", pd);
    println!(
        "\nConfidence: {} (score {:.3})",
        panel.confidence.band.label(),
        panel.confidence.score
    );
    println!("  {}", panel.confidence.rationale);

    println!("\nNarrative:");
    println!("  {}", panel.narrative);

    println!("\nTop factors: {}", panel.top_factors);

    println!("\nRecommendations:");
    for tip in &panel.recommendations {
        println!("  - {tip}");
    }

    println!("\nRanked actions:");
    for action in &panel.ranked_actions {
        println!(
            "  {}. {} (delta {:.3}, estimated pd {:.3})",
            action.rank, action.action, action.delta, action.estimated_pd
        );
    }

    if let Some(counterfactual) = &panel.counterfactual {
        println!("\nCounterfactual:");
        println!("  {}", counterfactual.text);
    }

    Ok(())
}
