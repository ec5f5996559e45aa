use clinsight_bedrock::narrative::build_hypothesis_block;
use clinsight_core::models::evidence::{EvidenceItem, EvidenceSource, EvidenceStrength};
use clinsight_core::models::hypothesis::{CertaintyTier, DiagnosticHypothesis, UrgencyTier};
use clinsight_core::models::patient::PatientContext;

fn hypothesis() -> DiagnosticHypothesis {
    DiagnosticHypothesis {
        condition: "myocardial_infarction".to_string(),
        condition_name: "Acute Myocardial Infarction".to_string(),
        icd_code: "I21.9".to_string(),
        probability: 0.62,
        certainty: CertaintyTier::Possible,
        urgency: UrgencyTier::Critical,
        supporting_evidence: vec![EvidenceItem {
            finding: "chest_pain".to_string(),
            present: true,
            weight: 1.0,
            confidence: 0.9,
            source: EvidenceSource::ClinicalExamination,
            strength: EvidenceStrength::Strong,
        }],
        contradicting_evidence: Vec::new(),
        reasoning: "rule-derived reasoning text".to_string(),
        next_steps: Vec::new(),
    }
}

#[test]
fn block_contains_hypothesis_fields() {
    let block = build_hypothesis_block(&hypothesis(), &PatientContext::default());
    assert!(block.starts_with("<hypothesis>"));
    assert!(block.ends_with("</patient>"));
    assert!(block.contains("condition: Acute Myocardial Infarction"));
    assert!(block.contains("probability: 0.62"));
    assert!(block.contains("reasoning: rule-derived reasoning text"));
    assert!(block.contains("supporting_findings: chest_pain"));
}

#[test]
fn empty_context_omits_patient_lines() {
    let block = build_hypothesis_block(&hypothesis(), &PatientContext::default());
    assert!(!block.contains("age:"));
    assert!(!block.contains("gender:"));
    assert!(!block.contains("history:"));
}

#[test]
fn populated_context_is_included() {
    let context = PatientContext {
        age: Some(60),
        gender: Some("male".to_string()),
        medical_history: vec!["hypertension".to_string()],
        ..PatientContext::default()
    };
    let block = build_hypothesis_block(&hypothesis(), &context);
    assert!(block.contains("age: 60"));
    assert!(block.contains("gender: male"));
    assert!(block.contains("history: hypertension"));
}
