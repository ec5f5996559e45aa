//! Keyword tables for the risk assessment sub-scorers.
//!
//! All matching is case-insensitive. Symptom combinations match as subsets:
//! every token of a combination must appear in the reported symptoms.

/// Symptom triads that indicate a possible emergency presentation.
pub static EMERGENCY_COMBINATIONS: &[&[&str]] = &[
    &["chest_pain", "shortness_of_breath", "diaphoresis"],
    &["facial_droop", "slurred_speech", "unilateral_weakness"],
    &["fever", "confusion", "hypotension"],
    &["severe_headache", "stiff_neck", "photophobia"],
];

/// Individual symptoms that each add to the symptom sub-score.
pub static HIGH_RISK_SYMPTOMS: &[&str] = &[
    "chest_pain",
    "shortness_of_breath",
    "syncope",
    "confusion",
    "severe_headache",
    "hemoptysis",
    "hematemesis",
    "unilateral_weakness",
    "slurred_speech",
    "hypotension",
];

/// Condition keywords matched against medical history and comorbidities.
pub static HIGH_RISK_CONDITIONS: &[&str] = &[
    "diabetes",
    "hypertension",
    "coronary",
    "heart failure",
    "copd",
    "renal",
    "kidney",
    "cancer",
    "stroke",
    "atrial fibrillation",
    "cirrhosis",
    "immunocompromised",
];

/// Medication keywords that carry elevated clinical risk.
pub static HIGH_RISK_MEDICATIONS: &[&str] = &[
    "warfarin",
    "heparin",
    "apixaban",
    "rivaroxaban",
    "insulin",
    "digoxin",
    "amiodarone",
    "chemotherapy",
    "immunosuppressant",
    "opioid",
    "lithium",
];

/// True when `text` contains `keyword`, ignoring ASCII case.
pub fn keyword_matches(text: &str, keyword: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}
