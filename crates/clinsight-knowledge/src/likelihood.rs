//! Likelihood-ratio table per (finding, condition) pair.
//!
//! Each entry carries a positive ratio (applied when the finding is present)
//! and a negative ratio (applied when it is explicitly absent). Ratios are
//! strictly positive; a ratio above 1 shifts the odds toward the condition,
//! below 1 away from it.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikelihoodRatio {
    pub positive: f64,
    pub negative: f64,
}

/// (finding, condition, positive ratio, negative ratio)
type Row = (&'static str, &'static str, f64, f64);

static ROWS: &[Row] = &[
    // chest pain
    ("chest_pain", "myocardial_infarction", 5.8, 0.3),
    ("chest_pain", "pulmonary_embolism", 1.8, 0.7),
    ("chest_pain", "gastroesophageal_reflux", 2.0, 0.6),
    ("chest_pain", "panic_disorder", 1.5, 0.8),
    ("chest_pain", "pneumonia", 1.2, 0.9),
    // dyspnea
    ("shortness_of_breath", "pulmonary_embolism", 3.2, 0.5),
    ("shortness_of_breath", "heart_failure", 3.0, 0.5),
    ("shortness_of_breath", "copd_exacerbation", 2.8, 0.5),
    ("shortness_of_breath", "pneumonia", 2.5, 0.6),
    ("shortness_of_breath", "myocardial_infarction", 2.2, 0.7),
    ("shortness_of_breath", "panic_disorder", 1.4, 0.9),
    // diaphoresis
    ("diaphoresis", "myocardial_infarction", 3.5, 0.7),
    ("diaphoresis", "sepsis", 1.8, 0.8),
    ("diaphoresis", "panic_disorder", 1.6, 0.9),
    // cardiac / autonomic
    ("palpitations", "panic_disorder", 2.4, 0.7),
    ("palpitations", "myocardial_infarction", 1.4, 0.9),
    ("nausea", "myocardial_infarction", 1.6, 0.9),
    ("nausea", "appendicitis", 2.0, 0.7),
    ("nausea", "migraine", 1.8, 0.8),
    ("syncope", "pulmonary_embolism", 2.3, 0.9),
    ("syncope", "myocardial_infarction", 1.8, 0.9),
    // infection
    ("fever", "sepsis", 3.0, 0.4),
    ("fever", "pneumonia", 2.6, 0.5),
    ("fever", "appendicitis", 1.6, 0.8),
    ("fever", "urinary_tract_infection", 1.5, 0.9),
    ("cough", "pneumonia", 2.2, 0.5),
    ("cough", "copd_exacerbation", 2.0, 0.6),
    ("sputum_production", "pneumonia", 2.0, 0.7),
    ("sputum_production", "copd_exacerbation", 2.2, 0.7),
    ("confusion", "sepsis", 2.8, 0.8),
    ("confusion", "stroke", 2.0, 0.8),
    ("hypotension", "sepsis", 3.4, 0.7),
    ("tachycardia", "sepsis", 2.0, 0.7),
    ("tachycardia", "pulmonary_embolism", 2.1, 0.7),
    // neuro
    ("facial_droop", "stroke", 8.5, 0.6),
    ("slurred_speech", "stroke", 5.5, 0.6),
    ("unilateral_weakness", "stroke", 6.0, 0.5),
    ("severe_headache", "migraine", 3.5, 0.4),
    ("severe_headache", "stroke", 1.5, 0.9),
    ("photophobia", "migraine", 2.8, 0.6),
    // respiratory / vascular
    ("pleuritic_chest_pain", "pulmonary_embolism", 2.6, 0.7),
    ("pleuritic_chest_pain", "pneumonia", 2.0, 0.8),
    ("unilateral_leg_swelling", "pulmonary_embolism", 3.8, 0.8),
    ("hemoptysis", "pulmonary_embolism", 2.4, 0.9),
    ("wheezing", "copd_exacerbation", 2.8, 0.6),
    ("wheezing", "heart_failure", 1.4, 0.9),
    ("orthopnea", "heart_failure", 3.2, 0.6),
    ("peripheral_edema", "heart_failure", 2.8, 0.7),
    // abdominal / GU
    ("abdominal_pain", "appendicitis", 3.0, 0.4),
    ("abdominal_pain", "gastroesophageal_reflux", 1.4, 0.9),
    ("right_lower_quadrant_pain", "appendicitis", 5.2, 0.5),
    ("heartburn", "gastroesophageal_reflux", 3.6, 0.5),
    ("regurgitation", "gastroesophageal_reflux", 3.0, 0.6),
    ("dysuria", "urinary_tract_infection", 4.5, 0.4),
    ("urinary_frequency", "urinary_tract_infection", 2.8, 0.6),
    // psych
    ("anxiety", "panic_disorder", 3.0, 0.5),
    ("fatigue", "heart_failure", 1.5, 0.9),
];

static TABLE: LazyLock<HashMap<&'static str, HashMap<&'static str, LikelihoodRatio>>> =
    LazyLock::new(|| {
        let mut table: HashMap<&'static str, HashMap<&'static str, LikelihoodRatio>> =
            HashMap::new();
        for (finding, condition, positive, negative) in ROWS {
            table.entry(finding).or_default().insert(
                condition,
                LikelihoodRatio {
                    positive: *positive,
                    negative: *negative,
                },
            );
        }
        table
    });

/// The full likelihood table, keyed finding → condition.
pub fn table() -> &'static HashMap<&'static str, HashMap<&'static str, LikelihoodRatio>> {
    &TABLE
}

/// Ratio for one (finding, condition) pair.
pub fn ratio(finding: &str, condition: &str) -> Option<LikelihoodRatio> {
    TABLE.get(finding)?.get(condition).copied()
}
