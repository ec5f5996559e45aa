//! Per-condition test algorithms.
//!
//! The immediate set is recommended when a hypothesis is strong (p > 0.6),
//! the sequential set when it is plausible (p > 0.3). Test identifiers are
//! canonical lowercase tokens shared with the workup planner.

use std::sync::LazyLock;

/// Test sets for one condition.
pub struct TestAlgorithm {
    pub condition: &'static str,
    pub immediate: &'static [&'static str],
    pub sequential: &'static [&'static str],
}

static ALGORITHMS: LazyLock<Vec<TestAlgorithm>> = LazyLock::new(|| {
    vec![
        TestAlgorithm {
            condition: "myocardial_infarction",
            immediate: &["ecg_12_lead", "troponin_serial"],
            sequential: &["echocardiogram", "coronary_angiography"],
        },
        TestAlgorithm {
            condition: "stroke",
            immediate: &["ct_head_non_contrast", "blood_glucose"],
            sequential: &["mri_brain", "carotid_doppler"],
        },
        TestAlgorithm {
            condition: "sepsis",
            immediate: &["blood_cultures", "serum_lactate"],
            sequential: &["procalcitonin", "chest_xray"],
        },
        TestAlgorithm {
            condition: "pulmonary_embolism",
            immediate: &["d_dimer", "ct_pulmonary_angiogram"],
            sequential: &["venous_doppler_legs"],
        },
        TestAlgorithm {
            condition: "pneumonia",
            immediate: &["chest_xray", "pulse_oximetry"],
            sequential: &["sputum_culture", "complete_blood_count"],
        },
        TestAlgorithm {
            condition: "heart_failure",
            immediate: &["bnp", "chest_xray"],
            sequential: &["echocardiogram"],
        },
        TestAlgorithm {
            condition: "appendicitis",
            immediate: &["complete_blood_count", "abdominal_ultrasound"],
            sequential: &["ct_abdomen_pelvis"],
        },
        TestAlgorithm {
            condition: "copd_exacerbation",
            immediate: &["pulse_oximetry", "arterial_blood_gas"],
            sequential: &["chest_xray", "spirometry"],
        },
        TestAlgorithm {
            condition: "gastroesophageal_reflux",
            immediate: &[],
            sequential: &["upper_endoscopy"],
        },
        TestAlgorithm {
            condition: "panic_disorder",
            immediate: &[],
            sequential: &["thyroid_panel", "ecg_12_lead"],
        },
        TestAlgorithm {
            condition: "migraine",
            immediate: &[],
            sequential: &["ct_head_non_contrast"],
        },
        TestAlgorithm {
            condition: "urinary_tract_infection",
            immediate: &["urinalysis"],
            sequential: &["urine_culture"],
        },
    ]
});

/// All test algorithms, in table order.
pub fn all() -> &'static [TestAlgorithm] {
    &ALGORITHMS
}

/// Test algorithm for one condition.
pub fn for_condition(condition: &str) -> Option<&'static TestAlgorithm> {
    ALGORITHMS.iter().find(|a| a.condition == condition)
}
