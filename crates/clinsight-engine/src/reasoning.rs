//! Bayesian differential diagnosis.
//!
//! For each condition in the prior table, evidence items are applied as
//! sequential odds-form updates against the static likelihood-ratio table,
//! each blended back toward the prior by the item's confidence. The update
//! assumes conditional independence between findings — a recognized
//! approximation preserved for compatibility with the source system.

use std::cmp::Ordering;

use tracing::{debug, warn};

use clinsight_core::models::evidence::EvidenceItem;
use clinsight_core::models::hypothesis::{CertaintyTier, DiagnosticHypothesis, UrgencyTier};
use clinsight_core::models::patient::PatientContext;
use clinsight_knowledge::conditions::{ConditionProfile, UrgencyDesignation};
use clinsight_knowledge::{likelihood, priors, test_algorithms, ConditionKnowledge};

/// Posteriors are capped below certainty: no amount of evidence yields 1.0.
pub const PROBABILITY_CAP: f64 = 0.99;

/// Conditions at or below this posterior are dropped from the differential.
pub const DISCARD_THRESHOLD: f64 = 0.05;

/// Maximum number of ranked hypotheses returned.
pub const MAX_HYPOTHESES: usize = 5;

/// Compute the ranked differential diagnosis for one request.
///
/// A condition whose profile lookup misses is skipped, never fatal. If every
/// lookup misses the result is an empty list and a warning is logged — the
/// caller reports an explicitly empty differential rather than fabricating a
/// default hypothesis.
pub fn differential_diagnosis<K: ConditionKnowledge + ?Sized>(
    knowledge: &K,
    evidence: &[EvidenceItem],
    context: &PatientContext,
) -> Vec<DiagnosticHypothesis> {
    let mut hypotheses = Vec::new();
    let mut lookup_misses = 0usize;

    for (&condition, &prior) in priors::table() {
        let Some(profile) = knowledge.profile(condition) else {
            lookup_misses += 1;
            debug!(condition, "condition profile unavailable; skipping");
            continue;
        };

        let posterior = posterior(condition, prior, evidence);
        if posterior <= DISCARD_THRESHOLD {
            continue;
        }

        let (supporting, contradicting) = partition_evidence(condition, evidence);
        let urgency = classify_urgency(&profile, posterior, context);

        hypotheses.push(DiagnosticHypothesis {
            condition: condition.to_string(),
            condition_name: profile.display_name.clone(),
            icd_code: profile.icd_codes.first().cloned().unwrap_or_default(),
            probability: posterior,
            certainty: CertaintyTier::from_probability(posterior),
            urgency,
            reasoning: build_reasoning(&profile, posterior, &supporting, &contradicting),
            next_steps: next_steps(&profile),
            supporting_evidence: supporting,
            contradicting_evidence: contradicting,
        });
    }

    if lookup_misses == priors::table().len() {
        warn!("all condition profile lookups failed; returning empty differential");
    }

    hypotheses.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.condition.cmp(&b.condition))
    });
    hypotheses.truncate(MAX_HYPOTHESES);
    hypotheses
}

/// Sequential odds-form posterior for one condition.
///
/// Per evidence item with a likelihood entry: `p = p·r / (p·r + (1−p))`,
/// then blended toward the prior by the item's confidence. The result is
/// capped at [`PROBABILITY_CAP`].
pub fn posterior(condition: &str, prior: f64, evidence: &[EvidenceItem]) -> f64 {
    let mut p = prior;

    for item in evidence {
        let Some(ratio) = likelihood::ratio(&item.finding, condition) else {
            continue;
        };
        let r = if item.present {
            ratio.positive
        } else {
            ratio.negative
        };

        p = (p * r) / (p * r + (1.0 - p));
        p = p * item.confidence + prior * (1.0 - item.confidence);
    }

    p.min(PROBABILITY_CAP)
}

/// Split evidence into supporting and contradicting sets for a condition by
/// sign-matching the likelihood ratio direction against presence. Items with
/// no likelihood entry, or a ratio of exactly 1, land in neither set.
pub fn partition_evidence(
    condition: &str,
    evidence: &[EvidenceItem],
) -> (Vec<EvidenceItem>, Vec<EvidenceItem>) {
    let mut supporting = Vec::new();
    let mut contradicting = Vec::new();

    for item in evidence {
        let Some(ratio) = likelihood::ratio(&item.finding, condition) else {
            continue;
        };
        let r = if item.present {
            ratio.positive
        } else {
            ratio.negative
        };
        if r > 1.0 {
            supporting.push(item.clone());
        } else if r < 1.0 {
            contradicting.push(item.clone());
        }
    }

    (supporting, contradicting)
}

/// Emergency-listed conditions turn critical above 0.3; designated
/// high-urgency conditions above 0.5, or any condition above 0.4 for
/// patients over 75, classify high; everything else is moderate.
fn classify_urgency(
    profile: &ConditionProfile,
    posterior: f64,
    context: &PatientContext,
) -> UrgencyTier {
    if profile.designation == UrgencyDesignation::Emergency && posterior > 0.3 {
        return UrgencyTier::Critical;
    }
    if profile.designation == UrgencyDesignation::HighUrgency && posterior > 0.5 {
        return UrgencyTier::High;
    }
    if context.age_or_default() > 75 && posterior > 0.4 {
        return UrgencyTier::High;
    }
    UrgencyTier::Moderate
}

fn build_reasoning(
    profile: &ConditionProfile,
    posterior: f64,
    supporting: &[EvidenceItem],
    contradicting: &[EvidenceItem],
) -> String {
    let list = |items: &[EvidenceItem]| {
        items
            .iter()
            .map(|i| i.finding.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut reasoning = format!(
        "{} carries an estimated probability of {:.0}%.",
        profile.display_name,
        posterior * 100.0
    );
    if !supporting.is_empty() {
        reasoning.push_str(&format!(" Supported by: {}.", list(supporting)));
    }
    if !contradicting.is_empty() {
        reasoning.push_str(&format!(" Weighed against: {}.", list(contradicting)));
    }
    if supporting.is_empty() && contradicting.is_empty() {
        reasoning.push_str(" No discriminating findings were reported.");
    }
    reasoning
}

/// Next steps: the condition's guideline plus its first-line tests.
fn next_steps(profile: &ConditionProfile) -> Vec<String> {
    let mut steps = vec![profile.guideline.clone()];
    if let Some(algorithm) = test_algorithms::for_condition(&profile.key) {
        for test in algorithm.immediate {
            steps.push(format!("Order {test}"));
        }
    }
    steps
}
