//! Prior probabilities per condition.
//!
//! Baseline presentation-population probabilities, strictly inside (0, 1).
//! Keyed by condition; a `BTreeMap` so iteration order is deterministic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

static PRIORS: LazyLock<BTreeMap<&'static str, f64>> = LazyLock::new(|| {
    BTreeMap::from([
        ("appendicitis", 0.02),
        ("copd_exacerbation", 0.03),
        ("gastroesophageal_reflux", 0.12),
        ("heart_failure", 0.03),
        ("migraine", 0.08),
        ("myocardial_infarction", 0.02),
        ("panic_disorder", 0.06),
        ("pneumonia", 0.05),
        ("pulmonary_embolism", 0.01),
        ("sepsis", 0.01),
        ("stroke", 0.015),
        ("urinary_tract_infection", 0.07),
    ])
});

/// The full prior table. Iteration order is condition-key ascending.
pub fn table() -> &'static BTreeMap<&'static str, f64> {
    &PRIORS
}

/// Prior probability for one condition.
pub fn prior(condition: &str) -> Option<f64> {
    PRIORS.get(condition).copied()
}
