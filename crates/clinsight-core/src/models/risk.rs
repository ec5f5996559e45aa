use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Threshold-derived overall risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    /// Classify an overall score: ≥0.85 critical, ≥0.70 high,
    /// ≥0.50 moderate, else low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            RiskLevel::Critical
        } else if score >= 0.70 {
            RiskLevel::High
        } else if score >= 0.50 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// The four independent sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskSubScores {
    pub symptom: f64,
    pub demographic: f64,
    pub comorbidity: f64,
    pub medication: f64,
}

/// Output of the risk assessment orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessmentResult {
    pub sub_scores: RiskSubScores,
    /// Weighted sum of the sub-scores.
    pub overall_score: f64,
    pub level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub protective_factors: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub escalation_criteria: Vec<String>,
    /// Confidence in this assessment given input completeness, 0–1.
    pub confidence: f64,
}
