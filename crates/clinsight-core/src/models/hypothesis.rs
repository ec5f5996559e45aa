use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::evidence::EvidenceItem;

/// Discrete banding of posterior probability into clinical confidence
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CertaintyTier {
    Definitive,
    Probable,
    Possible,
    Unlikely,
    Excluded,
}

impl CertaintyTier {
    /// Band a posterior probability: ≥0.90 definitive, ≥0.70 probable,
    /// ≥0.40 possible, ≥0.10 unlikely, else excluded.
    pub fn from_probability(p: f64) -> Self {
        if p >= 0.90 {
            CertaintyTier::Definitive
        } else if p >= 0.70 {
            CertaintyTier::Probable
        } else if p >= 0.40 {
            CertaintyTier::Possible
        } else if p >= 0.10 {
            CertaintyTier::Unlikely
        } else {
            CertaintyTier::Excluded
        }
    }
}

/// How time-sensitive a hypothesis is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UrgencyTier {
    Critical,
    High,
    Moderate,
    Low,
}

/// A candidate condition with its posterior probability and the evidence
/// that moved it there. Request-scoped; never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticHypothesis {
    /// Canonical condition key, e.g. `myocardial_infarction`.
    pub condition: String,
    /// Display name from the condition profile.
    pub condition_name: String,
    /// Primary classification code (ICD-10).
    pub icd_code: String,
    /// Posterior probability, 0–0.99.
    pub probability: f64,
    pub certainty: CertaintyTier,
    pub urgency: UrgencyTier,
    pub supporting_evidence: Vec<EvidenceItem>,
    pub contradicting_evidence: Vec<EvidenceItem>,
    /// Rule-derived reasoning narrative. May be replaced by enriched text;
    /// the probability and tiers above never change with it.
    pub reasoning: String,
    pub next_steps: Vec<String>,
}
