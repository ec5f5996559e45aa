//! Evidence extraction.
//!
//! Converts raw symptom strings and structured clinical findings into a
//! normalized list of weighted, sourced evidence items keyed by canonical
//! finding tokens.

use std::collections::HashMap;

use clinsight_core::models::evidence::{
    ClinicalFinding, EvidenceItem, EvidenceSource, EvidenceStrength,
};

const SYMPTOM_WEIGHT: f64 = 1.0;
const SYMPTOM_CONFIDENCE: f64 = 0.7;
const FINDING_WEIGHT: f64 = 1.0;
const FINDING_CONFIDENCE: f64 = 0.9;

/// Canonicalize a raw finding name into a lowercase token: trimmed,
/// lowercased, runs of whitespace and punctuation collapsed to `_`.
pub fn canonical_token(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    let mut prev_sep = true;
    for c in raw.trim().chars() {
        if c.is_alphanumeric() {
            token.extend(c.to_lowercase());
            prev_sep = false;
        } else if !prev_sep {
            token.push('_');
            prev_sep = true;
        }
    }
    while token.ends_with('_') {
        token.pop();
    }
    token
}

/// Normalize symptoms and findings into evidence items.
///
/// Patient-reported symptoms are always `present` with report-level
/// confidence; structured findings keep their own weight, confidence, and
/// strength, with examination defaults for omitted fields. When the same
/// token appears more than once, the higher-confidence item wins; insertion
/// order of first appearance is preserved.
pub fn extract_evidence(symptoms: &[String], findings: &[ClinicalFinding]) -> Vec<EvidenceItem> {
    let mut items: Vec<EvidenceItem> = Vec::new();
    let mut by_token: HashMap<String, usize> = HashMap::new();

    let mut push = |items: &mut Vec<EvidenceItem>, item: EvidenceItem| {
        if item.finding.is_empty() {
            return;
        }
        match by_token.get(&item.finding) {
            Some(&idx) => {
                if item.confidence > items[idx].confidence {
                    items[idx] = item;
                }
            }
            None => {
                by_token.insert(item.finding.clone(), items.len());
                items.push(item);
            }
        }
    };

    for symptom in symptoms {
        push(
            &mut items,
            EvidenceItem {
                finding: canonical_token(symptom),
                present: true,
                weight: SYMPTOM_WEIGHT,
                confidence: SYMPTOM_CONFIDENCE,
                source: EvidenceSource::PatientReport,
                strength: EvidenceStrength::Moderate,
            },
        );
    }

    for finding in findings {
        push(
            &mut items,
            EvidenceItem {
                finding: canonical_token(&finding.name),
                present: finding.present,
                weight: finding.weight.unwrap_or(FINDING_WEIGHT).max(0.0),
                confidence: finding.confidence.unwrap_or(FINDING_CONFIDENCE).clamp(0.0, 1.0),
                source: EvidenceSource::ClinicalExamination,
                strength: finding.strength.unwrap_or(EvidenceStrength::Strong),
            },
        );
    }

    items
}
