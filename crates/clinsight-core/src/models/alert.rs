use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::risk::RiskLevel;

/// An alert raised when a patient's overall risk crosses the high
/// threshold. Severity mirrors the risk level that triggered it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalAlert {
    pub id: Uuid,
    pub patient_id: String,
    pub severity: RiskLevel,
    pub message: String,
    /// Recommended response window, e.g. `immediate` or `within 1 hour`.
    pub recommended_timeline: String,
    pub created_at: jiff::Timestamp,
    pub expires_at: jiff::Timestamp,
}
