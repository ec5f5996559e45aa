use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a piece of evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceSource {
    /// Reported by the patient (symptom intake).
    PatientReport,
    /// Observed or measured during clinical examination.
    ClinicalExamination,
}

/// How strong a piece of evidence is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceStrength {
    Strong,
    Moderate,
    Weak,
    ExpertOpinion,
}

/// A normalized, weighted piece of diagnostic evidence.
///
/// Produced by the evidence extractor per request and never mutated
/// afterwards. The `finding` field is a canonical lowercase token
/// (e.g. `chest_pain`) matching the likelihood table's keys.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceItem {
    pub finding: String,
    pub present: bool,
    /// Diagnostic weight, ≥ 0.
    pub weight: f64,
    /// Confidence in the observation, 0–1.
    pub confidence: f64,
    pub source: EvidenceSource,
    pub strength: EvidenceStrength,
}

/// A structured clinical finding as submitted by the caller, before
/// normalization. Omitted fields take examination defaults.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFinding {
    pub name: String,
    pub present: bool,
    pub weight: Option<f64>,
    pub confidence: Option<f64>,
    pub strength: Option<EvidenceStrength>,
}
