//! Decision-support orchestration.
//!
//! Sequences risk assessment → differential diagnosis → suggestions →
//! workup planning within one request, merges the results into a single
//! [`ConsultationResult`], and hands alerts and the finished result to
//! fire-and-forget sinks. Sink failures are logged and never surfaced;
//! narrative enrichment is timeout-bounded and falls back to the
//! rule-derived reasoning text.

use std::future::Future;
use std::time::Duration;

use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use clinsight_core::models::alert::ClinicalAlert;
use clinsight_core::models::consultation::{ConfidenceMetrics, ConsultationResult};
use clinsight_core::models::evidence::{ClinicalFinding, EvidenceItem};
use clinsight_core::models::hypothesis::DiagnosticHypothesis;
use clinsight_core::models::patient::PatientContext;
use clinsight_knowledge::ConditionKnowledge;

use crate::error::{BoxError, DecisionError};
use crate::{evidence, reasoning, risk, suggest, workup};

/// Default bound on the narrative-enrichment call.
pub const DEFAULT_ENRICHMENT_TIMEOUT: Duration = Duration::from_secs(2);

/// Optional free-text enrichment of a hypothesis's reasoning narrative.
/// Advisory only: the returned text never alters probabilities, categories,
/// or priorities.
pub trait NarrativeEnricher: Send + Sync {
    fn enrich(
        &self,
        hypothesis: &DiagnosticHypothesis,
        context: &PatientContext,
    ) -> impl Future<Output = Result<String, BoxError>> + Send;
}

/// Outbound alert emission. Fire-and-forget: errors are logged only.
pub trait AlertSink: Send + Sync {
    fn emit(&self, alert: &ClinicalAlert) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Outbound result persistence. Fire-and-forget: errors are logged only.
pub trait ResultSink: Send + Sync {
    fn store(
        &self,
        result: &ConsultationResult,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Placeholder enricher used when no enrichment backend is configured.
pub struct NoEnrichment;

impl NarrativeEnricher for NoEnrichment {
    async fn enrich(
        &self,
        hypothesis: &DiagnosticHypothesis,
        _context: &PatientContext,
    ) -> Result<String, BoxError> {
        Ok(hypothesis.reasoning.clone())
    }
}

/// The root decision-support component.
pub struct DecisionSupport<K, A, R, E = NoEnrichment> {
    knowledge: K,
    alert_sink: A,
    result_sink: R,
    enricher: Option<E>,
    enrichment_timeout: Duration,
}

impl<K, A, R> DecisionSupport<K, A, R> {
    pub fn new(knowledge: K, alert_sink: A, result_sink: R) -> Self {
        Self {
            knowledge,
            alert_sink,
            result_sink,
            enricher: None,
            enrichment_timeout: DEFAULT_ENRICHMENT_TIMEOUT,
        }
    }
}

impl<K, A, R, E> DecisionSupport<K, A, R, E> {
    /// Attach a narrative enrichment backend.
    pub fn with_enricher<E2>(self, enricher: E2) -> DecisionSupport<K, A, R, E2> {
        DecisionSupport {
            knowledge: self.knowledge,
            alert_sink: self.alert_sink,
            result_sink: self.result_sink,
            enricher: Some(enricher),
            enrichment_timeout: self.enrichment_timeout,
        }
    }

    /// Attach an enrichment backend that may be absent at runtime.
    pub fn with_optional_enricher<E2>(self, enricher: Option<E2>) -> DecisionSupport<K, A, R, E2> {
        DecisionSupport {
            knowledge: self.knowledge,
            alert_sink: self.alert_sink,
            result_sink: self.result_sink,
            enricher,
            enrichment_timeout: self.enrichment_timeout,
        }
    }

    pub fn with_enrichment_timeout(mut self, timeout: Duration) -> Self {
        self.enrichment_timeout = timeout;
        self
    }
}

impl<K, A, R, E> DecisionSupport<K, A, R, E>
where
    K: ConditionKnowledge,
    A: AlertSink,
    R: ResultSink,
    E: NarrativeEnricher,
{
    /// Run the full pipeline for one request.
    ///
    /// Validation failures return [`DecisionError::InvalidInput`] with
    /// nothing computed. Every downstream failure mode (knowledge miss,
    /// enrichment timeout, sink error) is recovered locally, so a returned
    /// result is always fully computed — an empty differential is reported
    /// as such, never papered over.
    pub async fn assess_and_diagnose(
        &self,
        patient_id: &str,
        symptoms: &[String],
        context: &PatientContext,
        findings: &[ClinicalFinding],
    ) -> Result<ConsultationResult, DecisionError> {
        if patient_id.trim().is_empty() {
            return Err(DecisionError::InvalidInput(
                "patient id is required".to_string(),
            ));
        }
        if symptoms.is_empty() {
            return Err(DecisionError::InvalidInput(
                "at least one symptom is required".to_string(),
            ));
        }

        let consultation_id = Uuid::new_v4();
        info!(consultation_id = %consultation_id, "starting decision-support pipeline");

        // Risk assessment runs first; its alerts go out even if the
        // differential ends up empty.
        let risk = risk::assess_risk(symptoms, context, findings);
        let alerts = risk::alerts_for(patient_id, &risk);
        for alert in &alerts {
            if let Err(e) = self.alert_sink.emit(alert).await {
                warn!(alert_id = %alert.id, error = %e, "alert emission failed");
            }
        }

        let evidence_items = evidence::extract_evidence(symptoms, findings);
        let hypotheses =
            reasoning::differential_diagnosis(&self.knowledge, &evidence_items, context);
        if hypotheses.is_empty() {
            info!(consultation_id = %consultation_id, "differential diagnosis is empty");
        }

        let mut suggestions = suggest::generate_suggestions(&hypotheses, context);
        if let Some(enricher) = &self.enricher {
            for suggestion in &mut suggestions {
                match tokio::time::timeout(
                    self.enrichment_timeout,
                    enricher.enrich(&suggestion.hypothesis, context),
                )
                .await
                {
                    Ok(Ok(text)) if !text.trim().is_empty() => {
                        suggestion.hypothesis.reasoning = text;
                    }
                    Ok(Ok(_)) => {}
                    Ok(Err(e)) => {
                        warn!(
                            condition = %suggestion.hypothesis.condition,
                            error = %e,
                            "narrative enrichment failed; keeping rule-derived reasoning"
                        );
                    }
                    Err(_) => {
                        warn!(
                            condition = %suggestion.hypothesis.condition,
                            "narrative enrichment timed out; keeping rule-derived reasoning"
                        );
                    }
                }
            }
        }

        let plan = workup::build_plan(&suggestions, context);
        let confidence = confidence_metrics(&evidence_items, &hypotheses, context);

        let result = ConsultationResult {
            id: consultation_id,
            patient_id: patient_id.to_string(),
            risk,
            differential: suggestions,
            workup: plan,
            alerts,
            confidence,
            created_at: Timestamp::now(),
        };

        if let Err(e) = self.result_sink.store(&result).await {
            warn!(consultation_id = %consultation_id, error = %e, "result persistence failed");
        }

        info!(
            consultation_id = %consultation_id,
            hypotheses = result.differential.len(),
            alerts = result.alerts.len(),
            "decision-support pipeline complete"
        );

        Ok(result)
    }
}

/// Aggregate confidence: evidence confidence, context completeness, and the
/// strength of the leading hypothesis.
fn confidence_metrics(
    evidence: &[EvidenceItem],
    hypotheses: &[DiagnosticHypothesis],
    context: &PatientContext,
) -> ConfidenceMetrics {
    let avg_confidence = if evidence.is_empty() {
        0.0
    } else {
        evidence.iter().map(|e| e.confidence).sum::<f64>() / evidence.len() as f64
    };

    let completeness = data_completeness(context);
    let top_probability = hypotheses.first().map(|h| h.probability).unwrap_or(0.0);

    ConfidenceMetrics {
        overall: (0.5 * avg_confidence + 0.3 * completeness + 0.2 * top_probability).min(1.0),
        evidence_count: evidence.len(),
        hypothesis_count: hypotheses.len(),
        data_completeness: completeness,
    }
}

/// Fraction of patient-context fields that were populated.
fn data_completeness(context: &PatientContext) -> f64 {
    let populated = [
        context.age.is_some(),
        context.gender.is_some(),
        !context.medical_history.is_empty(),
        !context.comorbidities.is_empty(),
        !context.medications.is_empty(),
    ]
    .iter()
    .filter(|&&p| p)
    .count();
    populated as f64 / 5.0
}
