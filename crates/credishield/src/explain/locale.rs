//! Locale capability layer. Derivation logic never branches on the
//! locale itself; it asks a [`Localizer`] for labels, phrases, and
//! number grouping, so adding a locale means adding one implementation
//! here and nothing else.

use super::glossary;
use serde::{Deserialize, Serialize};

/// Supported dashboard locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn localizer(self) -> &'static dyn Localizer {
        match self {
            Locale::En => &English,
            Locale::Hi => &Hindi,
        }
    }
}

/// Template keys with their parameters. Every user-visible sentence the
/// derivation layer produces goes through one of these.
#[derive(Debug, Clone, Copy)]
pub enum Phrase<'a> {
    ConfidenceUnknown,
    ConfidenceHigh,
    ConfidenceMedium,
    ConfidenceLow,
    TipReduceAmount { amount: &'a str },
    TipShortenDuration { months: u64 },
    TipRebalanceInstallment,
    TipImproveBalances,
    TipSaferPurpose,
    TipRunSimulation,
    Narrative {
        pd_pct: &'a str,
        increasing: &'a str,
        decreasing: &'a str,
        amount: &'a str,
        months: &'a str,
    },
    ActionReduceAmount,
    ActionShortenTerm,
    ActionImproveBalances,
    Counterfactual {
        amount: &'a str,
        months: u64,
        pd_pct: &'a str,
    },
    NotApplicable,
}

/// One implementation per supported locale.
pub trait Localizer: Send + Sync {
    fn locale(&self) -> Locale;

    /// Human label for a feature identifier. Falls back to the
    /// glossary's normalized rendition for unseen identifiers, so this
    /// never fails.
    fn label(&self, feature_id: &str) -> String;

    /// Plain-language meaning of a feature identifier.
    fn meaning(&self, feature_id: &str) -> String {
        glossary::meaning(feature_id)
    }

    fn phrase(&self, phrase: Phrase<'_>) -> String;

    /// Render an integer amount with locale-appropriate digit grouping.
    fn group_number(&self, value: u64) -> String;
}

pub struct English;

impl Localizer for English {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn label(&self, feature_id: &str) -> String {
        let canonical = glossary::canonical(feature_id);
        glossary::label_en(canonical)
            .map(str::to_string)
            .unwrap_or_else(|| glossary::fallback_label(feature_id))
    }

    fn phrase(&self, phrase: Phrase<'_>) -> String {
        match phrase {
            Phrase::ConfidenceUnknown => {
                "Run an assessment to see how confident this estimate is.".to_string()
            }
            Phrase::ConfidenceHigh => {
                "The estimate sits far from the decision boundary and is concentrated in a few dominant factors."
                    .to_string()
            }
            Phrase::ConfidenceMedium => {
                "The estimate is a moderate distance from the decision boundary with partially concentrated factors."
                    .to_string()
            }
            Phrase::ConfidenceLow => {
                "The estimate sits close to the decision boundary and its factors are spread out."
                    .to_string()
            }
            Phrase::TipReduceAmount { amount } => {
                format!("Consider reducing the loan amount to about {amount}.")
            }
            Phrase::TipShortenDuration { months } => {
                format!("Consider shortening the repayment period to {months} months.")
            }
            Phrase::TipRebalanceInstallment => {
                "Rebalance the amount and duration to lower the installment burden.".to_string()
            }
            Phrase::TipImproveBalances => {
                "Improve your savings and checking balances before applying again.".to_string()
            }
            Phrase::TipSaferPurpose => {
                "Prefer a lower-risk loan purpose category.".to_string()
            }
            Phrase::TipRunSimulation => {
                "Try the what-if simulation before submitting the final application.".to_string()
            }
            Phrase::Narrative {
                pd_pct,
                increasing,
                decreasing,
                amount,
                months,
            } => format!(
                "The model estimates a {pd_pct}% probability of default. Main factors increasing risk: {increasing}. Main factors reducing risk: {decreasing}. This is based on a loan of {amount} over {months} months."
            ),
            Phrase::ActionReduceAmount => "Reduce the loan amount by about 10%".to_string(),
            Phrase::ActionShortenTerm => {
                "Shorten the repayment period by 6 months".to_string()
            }
            Phrase::ActionImproveBalances => {
                "Improve your savings or checking tier".to_string()
            }
            Phrase::Counterfactual {
                amount,
                months,
                pd_pct,
            } => format!(
                "With a loan of {amount} over {months} months, the estimated probability of default would drop to about {pd_pct}%."
            ),
            Phrase::NotApplicable => "N/A".to_string(),
        }
    }

    fn group_number(&self, value: u64) -> String {
        group_western(value)
    }
}

pub struct Hindi;

impl Localizer for Hindi {
    fn locale(&self) -> Locale {
        Locale::Hi
    }

    fn label(&self, feature_id: &str) -> String {
        let canonical = glossary::canonical(feature_id);
        glossary::label_hi(canonical)
            .map(str::to_string)
            .unwrap_or_else(|| glossary::fallback_label(feature_id))
    }

    fn phrase(&self, phrase: Phrase<'_>) -> String {
        match phrase {
            Phrase::ConfidenceUnknown => {
                "विश्वास स्तर देखने के लिए पहले एक आकलन चलाएँ।".to_string()
            }
            Phrase::ConfidenceHigh => {
                "अनुमान निर्णय-सीमा से काफ़ी दूर है और कुछ प्रमुख कारकों पर केंद्रित है।".to_string()
            }
            Phrase::ConfidenceMedium => {
                "अनुमान निर्णय-सीमा से मध्यम दूरी पर है और कारक आंशिक रूप से केंद्रित हैं।".to_string()
            }
            Phrase::ConfidenceLow => {
                "अनुमान निर्णय-सीमा के निकट है और कारक बिखरे हुए हैं।".to_string()
            }
            Phrase::TipReduceAmount { amount } => {
                format!("ऋण राशि घटाकर लगभग {amount} करने पर विचार करें।")
            }
            Phrase::TipShortenDuration { months } => {
                format!("चुकौती अवधि घटाकर {months} महीने करने पर विचार करें।")
            }
            Phrase::TipRebalanceInstallment => {
                "किस्त का भार कम करने के लिए राशि और अवधि का संतुलन बदलें।".to_string()
            }
            Phrase::TipImproveBalances => {
                "पुनः आवेदन से पहले बचत और चालू खाते की स्थिति सुधारें।".to_string()
            }
            Phrase::TipSaferPurpose => {
                "कम जोखिम वाले ऋण उद्देश्य को प्राथमिकता दें।".to_string()
            }
            Phrase::TipRunSimulation => {
                "अंतिम आवेदन से पहले सिमुलेशन सुविधा से विकल्प आज़माएँ।".to_string()
            }
            Phrase::Narrative {
                pd_pct,
                increasing,
                decreasing,
                amount,
                months,
            } => format!(
                "मॉडल के अनुसार चूक की संभावना {pd_pct}% है। जोखिम बढ़ाने वाले मुख्य कारक: {increasing}। जोखिम घटाने वाले मुख्य कारक: {decreasing}। यह आकलन {amount} की ऋण राशि और {months} महीनों की अवधि पर आधारित है।"
            ),
            Phrase::ActionReduceAmount => "ऋण राशि लगभग 10% घटाएँ".to_string(),
            Phrase::ActionShortenTerm => "चुकौती अवधि 6 महीने कम करें".to_string(),
            Phrase::ActionImproveBalances => {
                "बचत/चालू खाते की स्थिति सुधारें".to_string()
            }
            Phrase::Counterfactual {
                amount,
                months,
                pd_pct,
            } => format!(
                "यदि ऋण राशि {amount} और अवधि {months} महीने होती, तो अनुमानित चूक संभावना लगभग {pd_pct}% होती।"
            ),
            Phrase::NotApplicable => "लागू नहीं".to_string(),
        }
    }

    fn group_number(&self, value: u64) -> String {
        group_indian(value)
    }
}

/// Western grouping: thousands separators every three digits.
fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Indian grouping: the last three digits form one group, every two
/// digits after that (12,34,567).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (index, ch) in head.chars().enumerate() {
        if index > 0 && (head.len() - index) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}
