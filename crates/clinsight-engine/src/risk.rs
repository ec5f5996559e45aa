//! Multi-factor risk assessment.
//!
//! Four independent, pure sub-scorers (symptoms, demographics, comorbidity
//! burden, medication risk) feed a weighted overall score and a
//! threshold-derived risk level. A matched emergency symptom combination
//! escalates the level to critical regardless of the weighted sum.

use jiff::{Span, Timestamp};
use tracing::debug;
use uuid::Uuid;

use clinsight_core::models::alert::ClinicalAlert;
use clinsight_core::models::evidence::ClinicalFinding;
use clinsight_core::models::patient::PatientContext;
use clinsight_core::models::risk::{RiskAssessmentResult, RiskLevel, RiskSubScores};
use clinsight_knowledge::risk_tables;

use crate::evidence::canonical_token;

const SYMPTOM_WEIGHT: f64 = 0.30;
const DEMOGRAPHIC_WEIGHT: f64 = 0.20;
const COMORBIDITY_WEIGHT: f64 = 0.25;
const MEDICATION_WEIGHT: f64 = 0.15;
// The remaining 0.10 is reserved for a future sub-scorer.

const EMERGENCY_COMBO_SCORE: f64 = 0.9;
const HIGH_RISK_SYMPTOM_INCREMENT: f64 = 0.15;
const COMORBIDITY_INCREMENT: f64 = 0.1;
const MEDICATION_INCREMENT: f64 = 0.05;
const POLYPHARMACY_BONUS: f64 = 0.1;
const POLYPHARMACY_THRESHOLD: usize = 5;

const ALERT_TTL_HOURS: i64 = 24;

/// Score overall patient risk from symptoms, context, and findings.
pub fn assess_risk(
    symptoms: &[String],
    context: &PatientContext,
    findings: &[ClinicalFinding],
) -> RiskAssessmentResult {
    let tokens = symptom_tokens(symptoms, findings);

    let mut risk_factors = Vec::new();
    let mut protective_factors = Vec::new();

    let (symptom, emergency_combo) = symptom_score(&tokens, &mut risk_factors);
    let demographic = demographic_score(context, &mut risk_factors);
    let comorbidity = comorbidity_score(context, &mut risk_factors);
    let medication = medication_score(context, &mut risk_factors);

    let overall = symptom * SYMPTOM_WEIGHT
        + demographic * DEMOGRAPHIC_WEIGHT
        + comorbidity * COMORBIDITY_WEIGHT
        + medication * MEDICATION_WEIGHT;

    let level = if emergency_combo {
        RiskLevel::Critical
    } else {
        RiskLevel::from_score(overall)
    };

    collect_protective_factors(context, &mut protective_factors);

    debug!(
        symptom,
        demographic, comorbidity, medication, overall, "risk sub-scores computed"
    );

    RiskAssessmentResult {
        sub_scores: RiskSubScores {
            symptom,
            demographic,
            comorbidity,
            medication,
        },
        overall_score: overall,
        level,
        risk_factors,
        protective_factors,
        recommended_actions: recommended_actions(level),
        escalation_criteria: escalation_criteria(),
        confidence: assessment_confidence(symptoms, context),
    }
}

/// Build the alerts a risk assessment warrants: one alert when the level is
/// high or critical, with severity mirroring the level and a 24-hour expiry.
pub fn alerts_for(patient_id: &str, risk: &RiskAssessmentResult) -> Vec<ClinicalAlert> {
    let timeline = match risk.level {
        RiskLevel::Critical => "immediate",
        RiskLevel::High => "within 1 hour",
        RiskLevel::Moderate | RiskLevel::Low => return Vec::new(),
    };

    let created_at = Timestamp::now();
    let expires_at = created_at
        .checked_add(Span::new().hours(ALERT_TTL_HOURS))
        .unwrap_or(created_at);

    vec![ClinicalAlert {
        id: Uuid::new_v4(),
        patient_id: patient_id.to_string(),
        severity: risk.level,
        message: format!(
            "Overall risk score {:.2} classified {:?}; clinician review required.",
            risk.overall_score, risk.level
        ),
        recommended_timeline: timeline.to_string(),
        created_at,
        expires_at,
    }]
}

/// Canonical tokens from reported symptoms plus present clinical findings.
fn symptom_tokens(symptoms: &[String], findings: &[ClinicalFinding]) -> Vec<String> {
    let mut tokens: Vec<String> = symptoms.iter().map(|s| canonical_token(s)).collect();
    for finding in findings.iter().filter(|f| f.present) {
        let token = canonical_token(&finding.name);
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// 0.9 when a full emergency combination subset-matches the reported
/// symptoms; otherwise 0.15 per high-risk symptom. Returns the score and
/// whether a combination matched.
fn symptom_score(tokens: &[String], risk_factors: &mut Vec<String>) -> (f64, bool) {
    for combo in risk_tables::EMERGENCY_COMBINATIONS {
        if combo.iter().all(|c| tokens.iter().any(|t| t == c)) {
            risk_factors.push(format!(
                "emergency symptom combination: {}",
                combo.join(" + ")
            ));
            return (EMERGENCY_COMBO_SCORE, true);
        }
    }

    let mut score: f64 = 0.0;
    for symptom in risk_tables::HIGH_RISK_SYMPTOMS {
        if tokens.iter().any(|t| t == symptom) {
            score += HIGH_RISK_SYMPTOM_INCREMENT;
            risk_factors.push(format!("high-risk symptom: {symptom}"));
        }
    }
    (score.min(1.0), false)
}

/// Age bands (>75 → 0.4, >65 → 0.3, >50 → 0.2) plus 0.1 for males over 45.
fn demographic_score(context: &PatientContext, risk_factors: &mut Vec<String>) -> f64 {
    let age = context.age_or_default();
    let mut score: f64 = 0.0;

    if age > 75 {
        score += 0.4;
        risk_factors.push("age over 75".to_string());
    } else if age > 65 {
        score += 0.3;
        risk_factors.push("age over 65".to_string());
    } else if age > 50 {
        score += 0.2;
        risk_factors.push("age over 50".to_string());
    }

    if context.is_male() && age > 45 {
        score += 0.1;
        risk_factors.push("male over 45".to_string());
    }

    score.min(1.0)
}

/// 0.1 per high-risk condition keyword matched across medical history and
/// comorbidities. Each keyword counts once.
fn comorbidity_score(context: &PatientContext, risk_factors: &mut Vec<String>) -> f64 {
    let entries = context
        .medical_history
        .iter()
        .chain(context.comorbidities.iter());
    let entries: Vec<&String> = entries.collect();

    let mut score: f64 = 0.0;
    for keyword in risk_tables::HIGH_RISK_CONDITIONS {
        if entries
            .iter()
            .any(|e| risk_tables::keyword_matches(e, keyword))
        {
            score += COMORBIDITY_INCREMENT;
            risk_factors.push(format!("comorbidity: {keyword}"));
        }
    }
    score.min(1.0)
}

/// 0.05 per high-risk medication keyword, plus 0.1 for polypharmacy
/// (more than five active medications).
fn medication_score(context: &PatientContext, risk_factors: &mut Vec<String>) -> f64 {
    let mut score: f64 = 0.0;
    for keyword in risk_tables::HIGH_RISK_MEDICATIONS {
        if context
            .medications
            .iter()
            .any(|m| risk_tables::keyword_matches(m, keyword))
        {
            score += MEDICATION_INCREMENT;
            risk_factors.push(format!("high-risk medication: {keyword}"));
        }
    }
    if context.medications.len() > POLYPHARMACY_THRESHOLD {
        score += POLYPHARMACY_BONUS;
        risk_factors.push(format!(
            "polypharmacy: {} active medications",
            context.medications.len()
        ));
    }
    score.min(1.0)
}

fn collect_protective_factors(context: &PatientContext, protective: &mut Vec<String>) {
    if context.age_or_default() > 0 && context.age_or_default() < 40 {
        protective.push("age under 40".to_string());
    }
    if context.medical_history.is_empty() && context.comorbidities.is_empty() {
        protective.push("no documented comorbidities".to_string());
    }
    if context.medications.is_empty() {
        protective.push("no active medications".to_string());
    }
}

fn recommended_actions(level: RiskLevel) -> Vec<String> {
    let actions: &[&str] = match level {
        RiskLevel::Critical => &[
            "continuous monitoring",
            "immediate physician evaluation",
            "establish IV access",
        ],
        RiskLevel::High => &["physician evaluation within 1 hour", "repeat vital signs"],
        RiskLevel::Moderate => &["schedule follow-up within 48 hours"],
        RiskLevel::Low => &["routine care"],
    };
    actions.iter().map(|a| a.to_string()).collect()
}

fn escalation_criteria() -> Vec<String> {
    [
        "worsening or new symptoms",
        "new neurological deficit",
        "systolic blood pressure below 90 mmHg",
        "oxygen saturation below 92%",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

/// Confidence grows with input completeness: 0.5 base plus 0.1 per
/// populated context field, capped at 1.0.
fn assessment_confidence(symptoms: &[String], context: &PatientContext) -> f64 {
    let mut confidence: f64 = 0.5;
    if !symptoms.is_empty() {
        confidence += 0.1;
    }
    if context.age.is_some() {
        confidence += 0.1;
    }
    if context.gender.is_some() {
        confidence += 0.1;
    }
    if !context.medical_history.is_empty() || !context.comorbidities.is_empty() {
        confidence += 0.1;
    }
    if !context.medications.is_empty() {
        confidence += 0.1;
    }
    confidence.min(1.0)
}
