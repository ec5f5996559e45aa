use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::alert::ClinicalAlert;
use super::risk::RiskAssessmentResult;
use super::suggestion::DiagnosticSuggestion;
use super::workup::WorkupPlan;

/// Aggregate confidence signals for one consultation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceMetrics {
    /// Overall confidence in the pipeline output, 0–1.
    pub overall: f64,
    pub evidence_count: usize,
    pub hypothesis_count: usize,
    /// Fraction of patient-context fields that were populated.
    pub data_completeness: f64,
}

/// The composite response for one decision-support request. This is the
/// unit of persistence: one JSON object per consultation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationResult {
    pub id: Uuid,
    pub patient_id: String,
    pub risk: RiskAssessmentResult,
    /// Ranked differential. Explicitly empty when the reasoning engine
    /// produced no hypotheses — never a fabricated default.
    pub differential: Vec<DiagnosticSuggestion>,
    pub workup: WorkupPlan,
    pub alerts: Vec<ClinicalAlert>,
    pub confidence: ConfidenceMetrics,
    pub created_at: jiff::Timestamp,
}
