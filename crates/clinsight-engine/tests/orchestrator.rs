use std::sync::{Arc, Mutex};
use std::time::Duration;

use clinsight_core::models::alert::ClinicalAlert;
use clinsight_core::models::consultation::ConsultationResult;
use clinsight_core::models::hypothesis::DiagnosticHypothesis;
use clinsight_core::models::patient::PatientContext;
use clinsight_core::models::risk::RiskLevel;
use clinsight_engine::error::{BoxError, DecisionError};
use clinsight_engine::orchestrator::{
    AlertSink, DecisionSupport, NarrativeEnricher, ResultSink,
};
use clinsight_knowledge::conditions::ConditionProfile;
use clinsight_knowledge::{ClinicalKnowledgeBase, ConditionKnowledge};

#[derive(Clone, Default)]
struct MemoryAlerts {
    emitted: Arc<Mutex<Vec<ClinicalAlert>>>,
}

impl AlertSink for MemoryAlerts {
    async fn emit(&self, alert: &ClinicalAlert) -> Result<(), BoxError> {
        self.emitted.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct MemoryResults {
    stored: Arc<Mutex<Vec<ConsultationResult>>>,
}

impl ResultSink for MemoryResults {
    async fn store(&self, result: &ConsultationResult) -> Result<(), BoxError> {
        self.stored.lock().unwrap().push(result.clone());
        Ok(())
    }
}

struct FailingAlerts;

impl AlertSink for FailingAlerts {
    async fn emit(&self, _alert: &ClinicalAlert) -> Result<(), BoxError> {
        Err("alert sink unavailable".into())
    }
}

struct FailingResults;

impl ResultSink for FailingResults {
    async fn store(&self, _result: &ConsultationResult) -> Result<(), BoxError> {
        Err("document store unavailable".into())
    }
}

struct FixedEnricher;

impl NarrativeEnricher for FixedEnricher {
    async fn enrich(
        &self,
        _hypothesis: &DiagnosticHypothesis,
        _context: &PatientContext,
    ) -> Result<String, BoxError> {
        Ok("enriched narrative".to_string())
    }
}

struct FailingEnricher;

impl NarrativeEnricher for FailingEnricher {
    async fn enrich(
        &self,
        _hypothesis: &DiagnosticHypothesis,
        _context: &PatientContext,
    ) -> Result<String, BoxError> {
        Err("model endpoint down".into())
    }
}

struct SlowEnricher;

impl NarrativeEnricher for SlowEnricher {
    async fn enrich(
        &self,
        _hypothesis: &DiagnosticHypothesis,
        _context: &PatientContext,
    ) -> Result<String, BoxError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok("too late".to_string())
    }
}

struct NoProfiles;

impl ConditionKnowledge for NoProfiles {
    fn profile(&self, _key: &str) -> Option<ConditionProfile> {
        None
    }
}

fn cardiac_symptoms() -> Vec<String> {
    ["chest_pain", "shortness_of_breath", "diaphoresis"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn cardiac_context() -> PatientContext {
    PatientContext {
        age: Some(60),
        gender: Some("male".to_string()),
        medical_history: vec!["hypertension".to_string()],
        ..PatientContext::default()
    }
}

/// Examination-confirmed versions of the cardiac symptoms. Full confidence
/// keeps the posterior off the prior blend, so the leading hypothesis is
/// strong enough to drive test recommendations.
fn cardiac_findings() -> Vec<clinsight_core::models::evidence::ClinicalFinding> {
    cardiac_symptoms()
        .into_iter()
        .map(|name| clinsight_core::models::evidence::ClinicalFinding {
            name,
            present: true,
            weight: None,
            confidence: Some(1.0),
            strength: None,
        })
        .collect()
}

#[tokio::test]
async fn blank_patient_id_is_rejected_before_any_computation() {
    let alerts = MemoryAlerts::default();
    let results = MemoryResults::default();
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        alerts.clone(),
        results.clone(),
    );

    let err = support
        .assess_and_diagnose("  ", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, DecisionError::InvalidInput(_)));
    assert!(alerts.emitted.lock().unwrap().is_empty());
    assert!(results.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_symptom_list_is_rejected_before_any_computation() {
    let alerts = MemoryAlerts::default();
    let results = MemoryResults::default();
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        alerts.clone(),
        results.clone(),
    );

    let err = support
        .assess_and_diagnose("patient-1", &[], &PatientContext::default(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, DecisionError::InvalidInput(_)));
    assert!(alerts.emitted.lock().unwrap().is_empty());
    assert!(results.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn cardiac_presentation_runs_the_full_pipeline() {
    let alerts = MemoryAlerts::default();
    let results = MemoryResults::default();
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        alerts.clone(),
        results.clone(),
    );

    let result = support
        .assess_and_diagnose(
            "patient-1",
            &cardiac_symptoms(),
            &cardiac_context(),
            &cardiac_findings(),
        )
        .await
        .unwrap();

    assert!(matches!(
        result.risk.level,
        RiskLevel::Critical | RiskLevel::High
    ));
    assert!(!result.differential.is_empty());
    assert!(result
        .differential
        .iter()
        .any(|s| s.hypothesis.condition == "myocardial_infarction"));
    assert!(!result.workup.immediate.is_empty() || !result.workup.sequential.is_empty());

    let emitted = alerts.emitted.lock().unwrap();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].severity, RiskLevel::Critical);
    assert_eq!(result.alerts.len(), 1);

    let stored = results.stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, result.id);
}

#[tokio::test]
async fn sink_failures_never_fail_the_pipeline() {
    let support = DecisionSupport::new(ClinicalKnowledgeBase::new(), FailingAlerts, FailingResults);

    let result = support
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();
    assert!(!result.differential.is_empty());
}

#[tokio::test]
async fn knowledge_outage_yields_an_explicitly_empty_differential() {
    let results = MemoryResults::default();
    let support = DecisionSupport::new(NoProfiles, MemoryAlerts::default(), results.clone());

    let result = support
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();

    assert!(result.differential.is_empty());
    assert_eq!(result.confidence.hypothesis_count, 0);
    // Risk assessment and persistence still ran.
    assert!(matches!(
        result.risk.level,
        RiskLevel::Critical | RiskLevel::High
    ));
    assert_eq!(results.stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn enrichment_replaces_the_reasoning_narrative() {
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        MemoryAlerts::default(),
        MemoryResults::default(),
    )
    .with_enricher(FixedEnricher);

    let result = support
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();
    assert!(result
        .differential
        .iter()
        .all(|s| s.hypothesis.reasoning == "enriched narrative"));
}

#[tokio::test]
async fn enrichment_failure_keeps_the_rule_derived_reasoning() {
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        MemoryAlerts::default(),
        MemoryResults::default(),
    )
    .with_enricher(FailingEnricher);

    let result = support
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();
    assert!(result
        .differential
        .iter()
        .all(|s| !s.hypothesis.reasoning.is_empty() && s.hypothesis.reasoning != "enriched narrative"));
}

#[tokio::test]
async fn enrichment_timeout_keeps_the_rule_derived_reasoning() {
    let support = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        MemoryAlerts::default(),
        MemoryResults::default(),
    )
    .with_enrichment_timeout(Duration::from_millis(20))
    .with_enricher(SlowEnricher);

    let result = support
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();
    assert!(result
        .differential
        .iter()
        .all(|s| s.hypothesis.reasoning != "too late"));
}

#[tokio::test]
async fn enrichment_never_alters_probabilities_or_priorities() {
    let plain = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        MemoryAlerts::default(),
        MemoryResults::default(),
    );
    let enriched = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        MemoryAlerts::default(),
        MemoryResults::default(),
    )
    .with_enricher(FixedEnricher);

    let a = plain
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();
    let b = enriched
        .assess_and_diagnose("patient-1", &cardiac_symptoms(), &cardiac_context(), &[])
        .await
        .unwrap();

    assert_eq!(a.differential.len(), b.differential.len());
    for (x, y) in a.differential.iter().zip(b.differential.iter()) {
        assert_eq!(x.hypothesis.probability, y.hypothesis.probability);
        assert_eq!(x.category, y.category);
        assert_eq!(x.priority, y.priority);
    }
}
