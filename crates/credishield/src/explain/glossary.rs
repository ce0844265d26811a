//! Feature glossary: maps raw model feature identifiers to presentable
//! labels and plain-language meanings. Lookup never fails; unseen
//! identifiers fall back to a normalized rendition of the raw id.

/// Transformer prefixes emitted by the upstream preprocessing pipeline.
const PIPELINE_PREFIXES: [&str; 2] = ["num__", "cat__"];

/// Alias spellings observed in attribution output for the same
/// underlying attribute, resolved once before any dictionary lookup.
const ALIASES: [(&str, &str); 6] = [
    ("loan_amount", "credit_amount"),
    ("amount", "credit_amount"),
    ("tenure", "duration"),
    ("loan_duration", "duration"),
    ("checking", "checking_status"),
    ("savings", "savings_status"),
];

/// Resolve a raw feature identifier to its canonical attribute id.
pub fn canonical(feature_id: &str) -> &str {
    let stripped = strip_prefix(feature_id);
    for (alias, target) in ALIASES {
        if stripped == alias {
            return target;
        }
    }
    stripped
}

fn strip_prefix(feature_id: &str) -> &str {
    for prefix in PIPELINE_PREFIXES {
        if let Some(rest) = feature_id.strip_prefix(prefix) {
            return rest;
        }
    }
    feature_id
}

/// Fabricate a presentable label from an unknown identifier: strip the
/// pipeline prefix, replace separators with spaces, trim, and
/// capitalize the first character.
pub fn fallback_label(feature_id: &str) -> String {
    let cleaned = strip_prefix(feature_id)
        .replace(['_', '-'], " ")
        .trim()
        .to_string();
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => cleaned,
    }
}

pub(crate) fn label_en(canonical_id: &str) -> Option<&'static str> {
    let label = match canonical_id {
        "checking_status" => "Checking account status",
        "duration" => "Loan duration",
        "credit_history" => "Credit history",
        "purpose" => "Loan purpose",
        "credit_amount" => "Loan amount",
        "savings_status" => "Savings account status",
        "employment" => "Employment length",
        "installment_commitment" => "Installment burden",
        "personal_status" => "Personal status",
        "other_parties" => "Other parties",
        "residence_since" => "Years at residence",
        "property_magnitude" => "Property ownership",
        "age" => "Age",
        "other_payment_plans" => "Other payment plans",
        "housing" => "Housing situation",
        "existing_credits" => "Existing credits",
        "job" => "Job category",
        "num_dependents" => "Number of dependents",
        "own_telephone" => "Telephone registered",
        "foreign_worker" => "Foreign worker",
        _ => return None,
    };
    Some(label)
}

pub(crate) fn label_hi(canonical_id: &str) -> Option<&'static str> {
    let label = match canonical_id {
        "checking_status" => "चालू खाते की स्थिति",
        "duration" => "ऋण की अवधि",
        "credit_history" => "क्रेडिट इतिहास",
        "purpose" => "ऋण का उद्देश्य",
        "credit_amount" => "ऋण राशि",
        "savings_status" => "बचत खाते की स्थिति",
        "employment" => "रोज़गार अवधि",
        "installment_commitment" => "किस्त का भार",
        "personal_status" => "वैयक्तिक स्थिति",
        "other_parties" => "अन्य पक्ष",
        "residence_since" => "निवास के वर्ष",
        "property_magnitude" => "संपत्ति स्वामित्व",
        "age" => "आयु",
        "other_payment_plans" => "अन्य भुगतान योजनाएँ",
        "housing" => "आवास की स्थिति",
        "existing_credits" => "मौजूदा ऋण",
        "job" => "नौकरी की श्रेणी",
        "num_dependents" => "आश्रितों की संख्या",
        "own_telephone" => "पंजीकृत टेलीफोन",
        "foreign_worker" => "विदेशी कर्मचारी",
        _ => return None,
    };
    Some(label)
}

/// Plain-language meaning sentence for a feature identifier. Unknown
/// identifiers get a generic sentence rather than an error.
pub fn meaning(feature_id: &str) -> String {
    let sentence = match canonical(feature_id) {
        "checking_status" => "Balance profile of the applicant's checking account.",
        "duration" => "How many months the loan runs before full repayment.",
        "credit_history" => "Track record of past credits and repayment behavior.",
        "purpose" => "What the borrowed money will be used for.",
        "credit_amount" => "Total amount of money requested for the loan.",
        "savings_status" => "Balance profile of the applicant's savings accounts.",
        "employment" => "How long the applicant has held their current employment.",
        "installment_commitment" => {
            "Installment payments as a share of disposable income."
        }
        "age" => "Applicant's age in years at the time of application.",
        "existing_credits" => "Number of credits the applicant already holds at this bank.",
        "housing" => "Whether the applicant rents, owns, or lives for free.",
        "job" => "Skill category of the applicant's occupation.",
        _ => "This is one of the factors used to estimate risk.",
    };
    sentence.to_string()
}
