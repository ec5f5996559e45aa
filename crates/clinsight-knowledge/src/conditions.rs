//! Condition profiles: codes, typical findings, guideline snippets, and
//! urgency designations.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Urgency designation carried by a condition profile. Emergency-listed
/// conditions escalate hypothesis urgency at lower probability thresholds
/// than designated high-urgency ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UrgencyDesignation {
    Emergency,
    HighUrgency,
    Standard,
}

/// Static profile for one condition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionProfile {
    /// Canonical condition key, e.g. `myocardial_infarction`.
    pub key: String,
    pub display_name: String,
    /// ICD-10 codes, primary first.
    pub icd_codes: Vec<String>,
    /// Finding tokens typically seen with this condition.
    pub typical_findings: Vec<String>,
    pub guideline: String,
    pub designation: UrgencyDesignation,
}

struct ProfileRow {
    key: &'static str,
    display_name: &'static str,
    icd_codes: &'static [&'static str],
    typical_findings: &'static [&'static str],
    guideline: &'static str,
    designation: UrgencyDesignation,
}

static PROFILE_ROWS: &[ProfileRow] = &[
    ProfileRow {
        key: "myocardial_infarction",
        display_name: "Acute Myocardial Infarction",
        icd_codes: &["I21.9", "I21.4"],
        typical_findings: &["chest_pain", "diaphoresis", "shortness_of_breath", "nausea"],
        guideline: "Serial troponin and 12-lead ECG within 10 minutes of presentation; activate cath lab for ST elevation.",
        designation: UrgencyDesignation::Emergency,
    },
    ProfileRow {
        key: "stroke",
        display_name: "Acute Ischemic Stroke",
        icd_codes: &["I63.9"],
        typical_findings: &["facial_droop", "slurred_speech", "unilateral_weakness", "confusion"],
        guideline: "Non-contrast head CT before thrombolysis; document last-known-well time.",
        designation: UrgencyDesignation::Emergency,
    },
    ProfileRow {
        key: "sepsis",
        display_name: "Sepsis",
        icd_codes: &["A41.9"],
        typical_findings: &["fever", "confusion", "hypotension", "tachycardia"],
        guideline: "Blood cultures before antibiotics; lactate and broad-spectrum antibiotics within one hour.",
        designation: UrgencyDesignation::Emergency,
    },
    ProfileRow {
        key: "pulmonary_embolism",
        display_name: "Pulmonary Embolism",
        icd_codes: &["I26.99"],
        typical_findings: &["pleuritic_chest_pain", "shortness_of_breath", "tachycardia", "unilateral_leg_swelling", "hemoptysis"],
        guideline: "Risk-stratify with Wells criteria; D-dimer for low probability, CTPA otherwise.",
        designation: UrgencyDesignation::Emergency,
    },
    ProfileRow {
        key: "pneumonia",
        display_name: "Community-Acquired Pneumonia",
        icd_codes: &["J18.9"],
        typical_findings: &["fever", "cough", "sputum_production", "shortness_of_breath", "pleuritic_chest_pain"],
        guideline: "Chest radiograph to confirm; CURB-65 to guide disposition.",
        designation: UrgencyDesignation::HighUrgency,
    },
    ProfileRow {
        key: "heart_failure",
        display_name: "Decompensated Heart Failure",
        icd_codes: &["I50.9"],
        typical_findings: &["shortness_of_breath", "orthopnea", "peripheral_edema", "fatigue"],
        guideline: "BNP and chest radiograph; echocardiogram once stabilized.",
        designation: UrgencyDesignation::HighUrgency,
    },
    ProfileRow {
        key: "appendicitis",
        display_name: "Acute Appendicitis",
        icd_codes: &["K35.80"],
        typical_findings: &["abdominal_pain", "right_lower_quadrant_pain", "nausea", "fever"],
        guideline: "Surgical consult for classic presentation; imaging when equivocal.",
        designation: UrgencyDesignation::HighUrgency,
    },
    ProfileRow {
        key: "copd_exacerbation",
        display_name: "COPD Exacerbation",
        icd_codes: &["J44.1"],
        typical_findings: &["shortness_of_breath", "wheezing", "cough", "sputum_production"],
        guideline: "Pulse oximetry and blood gas; bronchodilators and steroids per GOLD.",
        designation: UrgencyDesignation::Standard,
    },
    ProfileRow {
        key: "gastroesophageal_reflux",
        display_name: "Gastroesophageal Reflux Disease",
        icd_codes: &["K21.9"],
        typical_findings: &["heartburn", "regurgitation", "chest_pain"],
        guideline: "Empiric acid suppression; endoscopy for alarm features.",
        designation: UrgencyDesignation::Standard,
    },
    ProfileRow {
        key: "panic_disorder",
        display_name: "Panic Disorder",
        icd_codes: &["F41.0"],
        typical_findings: &["palpitations", "chest_pain", "shortness_of_breath", "anxiety", "diaphoresis"],
        guideline: "Diagnosis of exclusion — rule out cardiac and thyroid causes first.",
        designation: UrgencyDesignation::Standard,
    },
    ProfileRow {
        key: "migraine",
        display_name: "Migraine",
        icd_codes: &["G43.909"],
        typical_findings: &["severe_headache", "photophobia", "nausea"],
        guideline: "Neuroimaging only for red-flag features or atypical course.",
        designation: UrgencyDesignation::Standard,
    },
    ProfileRow {
        key: "urinary_tract_infection",
        display_name: "Urinary Tract Infection",
        icd_codes: &["N39.0"],
        typical_findings: &["dysuria", "urinary_frequency", "fever"],
        guideline: "Urinalysis; culture before antibiotics when pyelonephritis is suspected.",
        designation: UrgencyDesignation::Standard,
    },
];

static PROFILES: LazyLock<Vec<ConditionProfile>> = LazyLock::new(|| {
    PROFILE_ROWS
        .iter()
        .map(|row| ConditionProfile {
            key: row.key.to_string(),
            display_name: row.display_name.to_string(),
            icd_codes: row.icd_codes.iter().map(|c| c.to_string()).collect(),
            typical_findings: row.typical_findings.iter().map(|f| f.to_string()).collect(),
            guideline: row.guideline.to_string(),
            designation: row.designation,
        })
        .collect()
});

/// All condition profiles, in table order.
pub fn all() -> &'static [ConditionProfile] {
    &PROFILES
}

/// Look up a profile by condition key.
pub fn lookup(key: &str) -> Option<ConditionProfile> {
    PROFILES.iter().find(|p| p.key == key).cloned()
}
