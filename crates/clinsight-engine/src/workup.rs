//! Workup planning.
//!
//! Buckets recommended tests into immediate/sequential/conditional phases by
//! suggestion priority, deduplicates within each phase, and sorts by a fixed
//! urgency order. Timeline, resource, and quality figures come from fixed
//! lookups — deterministic heuristics suitable for replacement with a cost
//! model later.

use clinsight_core::models::patient::PatientContext;
use clinsight_core::models::suggestion::{DiagnosticSuggestion, SuggestionPriority};
use clinsight_core::models::workup::{
    PlannedTest, QualityEstimate, TimelineEstimate, WorkupPlan,
};

/// Build the workup plan for a ranked suggestion list.
pub fn build_plan(
    suggestions: &[DiagnosticSuggestion],
    _context: &PatientContext,
) -> WorkupPlan {
    let mut immediate = Vec::new();
    let mut sequential = Vec::new();
    let mut conditional = Vec::new();

    for suggestion in suggestions {
        let phase = match suggestion.priority {
            SuggestionPriority::Immediate | SuggestionPriority::Urgent => &mut immediate,
            SuggestionPriority::Routine => &mut sequential,
            SuggestionPriority::FollowUp => &mut conditional,
        };
        for test in &suggestion.recommended_tests {
            phase.push(PlannedTest {
                test_id: test.test_id.clone(),
                rationale: test.rationale.clone(),
                urgency: test.urgency,
            });
        }
    }

    let immediate = dedup_and_sort(immediate);
    let sequential = dedup_and_sort(sequential);
    let conditional = dedup_and_sort(conditional);

    let timeline = timeline_for(&immediate, &sequential, &conditional);
    let resources = resources_for(&immediate, &sequential, &conditional);

    WorkupPlan {
        immediate,
        sequential,
        conditional,
        timeline,
        resources,
        // Fixed heuristic values, not learned.
        quality: QualityEstimate {
            expected_accuracy: 0.85,
            false_positive_risk: 0.12,
            false_negative_risk: 0.08,
        },
    }
}

/// Deduplicate by test identifier (first occurrence wins), then stable-sort
/// by the fixed urgency order. Idempotent: applying it to its own output
/// changes nothing.
pub fn dedup_and_sort(tests: Vec<PlannedTest>) -> Vec<PlannedTest> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<PlannedTest> = Vec::new();
    for test in tests {
        if !seen.contains(&test.test_id) {
            seen.push(test.test_id.clone());
            out.push(test);
        }
    }
    out.sort_by_key(|t| t.urgency);
    out
}

fn timeline_for(
    immediate: &[PlannedTest],
    sequential: &[PlannedTest],
    conditional: &[PlannedTest],
) -> TimelineEstimate {
    let immediate_phase = if immediate.is_empty() {
        "none"
    } else {
        "0-2 hours"
    };
    let sequential_phase = if sequential.is_empty() {
        "none"
    } else {
        "24-72 hours"
    };
    let conditional_phase = if conditional.is_empty() {
        "none"
    } else {
        "1-2 weeks as indicated"
    };
    let total = if !sequential.is_empty() || !conditional.is_empty() {
        "up to 2 weeks"
    } else if !immediate.is_empty() {
        "same day"
    } else {
        "none"
    };

    TimelineEstimate {
        immediate_phase: immediate_phase.to_string(),
        sequential_phase: sequential_phase.to_string(),
        conditional_phase: conditional_phase.to_string(),
        total: total.to_string(),
    }
}

fn resources_for(
    immediate: &[PlannedTest],
    sequential: &[PlannedTest],
    conditional: &[PlannedTest],
) -> Vec<String> {
    let mut resources = Vec::new();
    if !immediate.is_empty() {
        resources.push("emergency department".to_string());
        resources.push("stat laboratory".to_string());
    }
    if !sequential.is_empty() {
        resources.push("outpatient laboratory".to_string());
        resources.push("imaging suite".to_string());
    }
    if !conditional.is_empty() {
        resources.push("specialty clinic".to_string());
    }
    resources
}
