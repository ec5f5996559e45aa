use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Urgency annotation for a planned test. Ordering is the fixed sort
/// order within a workup phase: immediate < urgent < routine < conditional.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestUrgency {
    Immediate,
    Urgent,
    Routine,
    Conditional,
}

/// A test placed into a workup phase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlannedTest {
    pub test_id: String,
    pub rationale: String,
    pub urgency: TestUrgency,
}

/// Rough wall-clock estimate for completing the workup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelineEstimate {
    pub immediate_phase: String,
    pub sequential_phase: String,
    pub conditional_phase: String,
    pub total: String,
}

/// Expected diagnostic quality of the plan. Fixed heuristic values, not
/// learned; suitable for replacement with a cost model later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityEstimate {
    pub expected_accuracy: f64,
    pub false_positive_risk: f64,
    pub false_negative_risk: f64,
}

/// The ordered set of diagnostic tests recommended to confirm or exclude
/// hypotheses, split into three phases.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkupPlan {
    /// Tests that should be ordered now.
    pub immediate: Vec<PlannedTest>,
    /// Tests ordered after the immediate phase resolves.
    pub sequential: Vec<PlannedTest>,
    /// Tests contingent on earlier results.
    pub conditional: Vec<PlannedTest>,
    pub timeline: TimelineEstimate,
    pub resources: Vec<String>,
    pub quality: QualityEstimate,
}
