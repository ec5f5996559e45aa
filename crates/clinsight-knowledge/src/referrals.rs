//! Specialist referral rules.
//!
//! Rules are evaluated in table order; the first rule whose condition set
//! contains the hypothesis and whose probability threshold is met wins.

use std::sync::LazyLock;

use clinsight_core::models::hypothesis::UrgencyTier;
use clinsight_core::models::suggestion::ReferralType;

pub struct ReferralRule {
    pub specialty: &'static str,
    pub conditions: &'static [&'static str],
    /// Minimum posterior probability for this rule to fire.
    pub min_probability: f64,
}

impl ReferralRule {
    /// Map a hypothesis urgency tier to a referral type.
    pub fn referral_type(&self, urgency: UrgencyTier) -> ReferralType {
        match urgency {
            UrgencyTier::Critical => ReferralType::Emergency,
            UrgencyTier::High => ReferralType::Urgent,
            UrgencyTier::Moderate | UrgencyTier::Low => ReferralType::Routine,
        }
    }
}

static RULES: LazyLock<Vec<ReferralRule>> = LazyLock::new(|| {
    vec![
        ReferralRule {
            specialty: "cardiology",
            conditions: &["myocardial_infarction", "heart_failure"],
            min_probability: 0.3,
        },
        ReferralRule {
            specialty: "neurology",
            conditions: &["stroke", "migraine"],
            min_probability: 0.3,
        },
        ReferralRule {
            specialty: "pulmonology",
            conditions: &["pulmonary_embolism", "copd_exacerbation", "pneumonia"],
            min_probability: 0.4,
        },
        ReferralRule {
            specialty: "infectious_disease",
            conditions: &["sepsis"],
            min_probability: 0.3,
        },
        ReferralRule {
            specialty: "general_surgery",
            conditions: &["appendicitis"],
            min_probability: 0.4,
        },
        ReferralRule {
            specialty: "gastroenterology",
            conditions: &["gastroesophageal_reflux"],
            min_probability: 0.6,
        },
        ReferralRule {
            specialty: "psychiatry",
            conditions: &["panic_disorder"],
            min_probability: 0.6,
        },
        ReferralRule {
            specialty: "urology",
            conditions: &["urinary_tract_infection"],
            min_probability: 0.7,
        },
    ]
});

/// All referral rules, in evaluation order.
pub fn rules() -> &'static [ReferralRule] {
    &RULES
}
