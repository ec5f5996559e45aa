use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::hypothesis::DiagnosticHypothesis;
use super::workup::TestUrgency;

/// Where a suggestion sits in the differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SuggestionCategory {
    Primary,
    Differential,
    RuleOut,
    Screening,
    Incidental,
}

/// How quickly a suggestion should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SuggestionPriority {
    Immediate,
    Urgent,
    Routine,
    FollowUp,
}

/// A single recommended diagnostic test.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendedTest {
    /// Canonical test identifier, e.g. `ecg_12_lead`.
    pub test_id: String,
    pub rationale: String,
    pub urgency: TestUrgency,
    /// Set when patient age warrants adjusted interpretation.
    pub age_note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReferralType {
    Emergency,
    Urgent,
    Routine,
}

/// A specialist referral attached to a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecialistReferral {
    pub specialty: String,
    pub referral_type: ReferralType,
    pub reason: String,
}

/// A diagnostic hypothesis enriched into an actionable suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticSuggestion {
    pub hypothesis: DiagnosticHypothesis,
    pub category: SuggestionCategory,
    pub priority: SuggestionPriority,
    pub recommended_tests: Vec<RecommendedTest>,
    pub referral: Option<SpecialistReferral>,
    /// Probability scaled by urgency multiplier and age adjustment,
    /// capped at 1.0.
    pub urgency_score: f64,
}
