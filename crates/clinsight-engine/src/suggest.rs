//! Diagnostic suggestion generation.
//!
//! Enriches each ranked hypothesis into an actionable suggestion using the
//! static test-algorithm and referral tables. Pure given its inputs; the
//! optional narrative enrichment happens later in the orchestrator and never
//! alters category, priority, or scores.

use clinsight_core::models::hypothesis::{DiagnosticHypothesis, UrgencyTier};
use clinsight_core::models::patient::PatientContext;
use clinsight_core::models::suggestion::{
    DiagnosticSuggestion, RecommendedTest, SpecialistReferral, SuggestionCategory,
    SuggestionPriority,
};
use clinsight_core::models::workup::TestUrgency;
use clinsight_knowledge::{referrals, test_algorithms};

const IMMEDIATE_TEST_THRESHOLD: f64 = 0.6;
const SEQUENTIAL_TEST_THRESHOLD: f64 = 0.3;
const AGE_NOTE_THRESHOLD: u32 = 65;

const ELDERLY_MULTIPLIER: f64 = 1.1;
const PEDIATRIC_MULTIPLIER: f64 = 1.05;

/// Generate one suggestion per hypothesis, preserving rank order.
pub fn generate_suggestions(
    hypotheses: &[DiagnosticHypothesis],
    context: &PatientContext,
) -> Vec<DiagnosticSuggestion> {
    hypotheses
        .iter()
        .enumerate()
        .map(|(rank, hypothesis)| build_suggestion(rank, hypothesis, context))
        .collect()
}

fn build_suggestion(
    rank: usize,
    hypothesis: &DiagnosticHypothesis,
    context: &PatientContext,
) -> DiagnosticSuggestion {
    let p = hypothesis.probability;

    DiagnosticSuggestion {
        category: categorize(rank, p),
        priority: prioritize(hypothesis.urgency, p),
        recommended_tests: recommend_tests(hypothesis, context),
        referral: referral_for(hypothesis),
        urgency_score: urgency_score(hypothesis, context),
        hypothesis: hypothesis.clone(),
    }
}

/// Rank 0 above 0.6 is the primary; otherwise band by probability.
fn categorize(rank: usize, p: f64) -> SuggestionCategory {
    if rank == 0 && p > 0.6 {
        SuggestionCategory::Primary
    } else if p > 0.3 {
        SuggestionCategory::Differential
    } else if p > 0.1 {
        SuggestionCategory::RuleOut
    } else {
        SuggestionCategory::Screening
    }
}

fn prioritize(urgency: UrgencyTier, p: f64) -> SuggestionPriority {
    if urgency == UrgencyTier::Critical {
        SuggestionPriority::Immediate
    } else if urgency == UrgencyTier::High || p > 0.7 {
        SuggestionPriority::Urgent
    } else if p > 0.3 {
        SuggestionPriority::Routine
    } else {
        SuggestionPriority::FollowUp
    }
}

/// Pull tests from the condition's algorithm table: the immediate set when
/// the hypothesis is strong, the sequential set when it is plausible.
fn recommend_tests(
    hypothesis: &DiagnosticHypothesis,
    context: &PatientContext,
) -> Vec<RecommendedTest> {
    let Some(algorithm) = test_algorithms::for_condition(&hypothesis.condition) else {
        return Vec::new();
    };

    let p = hypothesis.probability;
    let age = context.age_or_default();
    let age_note = (age > AGE_NOTE_THRESHOLD)
        .then(|| format!("interpret in the context of age {age}"));

    let mut tests = Vec::new();
    if p > IMMEDIATE_TEST_THRESHOLD {
        for test in algorithm.immediate {
            tests.push(RecommendedTest {
                test_id: test.to_string(),
                rationale: format!(
                    "Confirmatory test for {} (p = {:.2})",
                    hypothesis.condition_name, p
                ),
                urgency: TestUrgency::Immediate,
                age_note: age_note.clone(),
            });
        }
    }
    if p > SEQUENTIAL_TEST_THRESHOLD {
        for test in algorithm.sequential {
            tests.push(RecommendedTest {
                test_id: test.to_string(),
                rationale: format!(
                    "Staged evaluation for {} (p = {:.2})",
                    hypothesis.condition_name, p
                ),
                urgency: TestUrgency::Routine,
                age_note: age_note.clone(),
            });
        }
    }

    dedup_tests(tests)
}

/// First occurrence of a test identifier wins.
fn dedup_tests(tests: Vec<RecommendedTest>) -> Vec<RecommendedTest> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for test in tests {
        if !seen.contains(&test.test_id) {
            seen.push(test.test_id.clone());
            out.push(test);
        }
    }
    out
}

/// First matching referral rule wins.
fn referral_for(hypothesis: &DiagnosticHypothesis) -> Option<SpecialistReferral> {
    for rule in referrals::rules() {
        if rule.conditions.contains(&hypothesis.condition.as_str())
            && hypothesis.probability >= rule.min_probability
        {
            return Some(SpecialistReferral {
                specialty: rule.specialty.to_string(),
                referral_type: rule.referral_type(hypothesis.urgency),
                reason: format!(
                    "{} at p = {:.2}",
                    hypothesis.condition_name, hypothesis.probability
                ),
            });
        }
    }
    None
}

/// Probability scaled by the urgency-tier multiplier, adjusted for age
/// extremes, capped at 1.0.
fn urgency_score(hypothesis: &DiagnosticHypothesis, context: &PatientContext) -> f64 {
    let multiplier = match hypothesis.urgency {
        UrgencyTier::Critical => 1.0,
        UrgencyTier::High => 0.8,
        UrgencyTier::Moderate => 0.6,
        UrgencyTier::Low => 0.4,
    };

    let mut score = hypothesis.probability * multiplier;

    let age = context.age_or_default();
    if age > 75 {
        score *= ELDERLY_MULTIPLIER;
    } else if context.age.is_some() && age < 18 {
        score *= PEDIATRIC_MULTIPLIER;
    }

    score.min(1.0)
}
