use clinsight_core::models::hypothesis::{CertaintyTier, DiagnosticHypothesis, UrgencyTier};
use clinsight_core::models::patient::PatientContext;
use clinsight_core::models::suggestion::{ReferralType, SuggestionCategory, SuggestionPriority};
use clinsight_core::models::workup::TestUrgency;
use clinsight_engine::suggest::generate_suggestions;

fn hypothesis(condition: &str, probability: f64, urgency: UrgencyTier) -> DiagnosticHypothesis {
    DiagnosticHypothesis {
        condition: condition.to_string(),
        condition_name: condition.replace('_', " "),
        icd_code: "R00.0".to_string(),
        probability,
        certainty: CertaintyTier::from_probability(probability),
        urgency,
        supporting_evidence: Vec::new(),
        contradicting_evidence: Vec::new(),
        reasoning: "rule-derived reasoning".to_string(),
        next_steps: Vec::new(),
    }
}

#[test]
fn leading_strong_hypothesis_is_primary() {
    let hypotheses = vec![
        hypothesis("myocardial_infarction", 0.72, UrgencyTier::Critical),
        hypothesis("gastroesophageal_reflux", 0.35, UrgencyTier::Moderate),
        hypothesis("panic_disorder", 0.15, UrgencyTier::Moderate),
        hypothesis("migraine", 0.08, UrgencyTier::Moderate),
    ];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());

    assert_eq!(suggestions[0].category, SuggestionCategory::Primary);
    assert_eq!(suggestions[1].category, SuggestionCategory::Differential);
    assert_eq!(suggestions[2].category, SuggestionCategory::RuleOut);
    assert_eq!(suggestions[3].category, SuggestionCategory::Screening);
}

#[test]
fn weak_leader_is_not_primary() {
    let hypotheses = vec![hypothesis("pneumonia", 0.5, UrgencyTier::Moderate)];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    assert_eq!(suggestions[0].category, SuggestionCategory::Differential);
}

#[test]
fn priority_follows_urgency_then_probability() {
    let cases = [
        (hypothesis("a", 0.4, UrgencyTier::Critical), SuggestionPriority::Immediate),
        (hypothesis("b", 0.4, UrgencyTier::High), SuggestionPriority::Urgent),
        (hypothesis("c", 0.75, UrgencyTier::Moderate), SuggestionPriority::Urgent),
        (hypothesis("d", 0.4, UrgencyTier::Moderate), SuggestionPriority::Routine),
        (hypothesis("e", 0.2, UrgencyTier::Moderate), SuggestionPriority::FollowUp),
    ];
    for (h, expected) in cases {
        let suggestions = generate_suggestions(&[h], &PatientContext::default());
        assert_eq!(suggestions[0].priority, expected);
    }
}

#[test]
fn strong_hypothesis_gets_immediate_and_sequential_tests() {
    let hypotheses = vec![hypothesis("myocardial_infarction", 0.7, UrgencyTier::Critical)];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    let tests = &suggestions[0].recommended_tests;

    let ids: Vec<&str> = tests.iter().map(|t| t.test_id.as_str()).collect();
    assert!(ids.contains(&"ecg_12_lead"));
    assert!(ids.contains(&"troponin_serial"));
    assert!(ids.contains(&"echocardiogram"));

    let ecg = tests.iter().find(|t| t.test_id == "ecg_12_lead").unwrap();
    assert_eq!(ecg.urgency, TestUrgency::Immediate);
    let echo = tests.iter().find(|t| t.test_id == "echocardiogram").unwrap();
    assert_eq!(echo.urgency, TestUrgency::Routine);
}

#[test]
fn plausible_hypothesis_gets_only_sequential_tests() {
    let hypotheses = vec![hypothesis("myocardial_infarction", 0.45, UrgencyTier::Critical)];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    let ids: Vec<&str> = suggestions[0]
        .recommended_tests
        .iter()
        .map(|t| t.test_id.as_str())
        .collect();
    assert!(!ids.contains(&"ecg_12_lead"));
    assert!(ids.contains(&"echocardiogram"));
}

#[test]
fn age_note_is_attached_over_sixty_five() {
    let context = PatientContext {
        age: Some(72),
        ..PatientContext::default()
    };
    let hypotheses = vec![hypothesis("pneumonia", 0.7, UrgencyTier::High)];
    let suggestions = generate_suggestions(&hypotheses, &context);
    assert!(suggestions[0]
        .recommended_tests
        .iter()
        .all(|t| t.age_note.is_some()));

    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    assert!(suggestions[0]
        .recommended_tests
        .iter()
        .all(|t| t.age_note.is_none()));
}

#[test]
fn first_matching_referral_rule_wins() {
    let hypotheses = vec![hypothesis("myocardial_infarction", 0.5, UrgencyTier::Critical)];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    let referral = suggestions[0].referral.as_ref().expect("referral expected");
    assert_eq!(referral.specialty, "cardiology");
    assert_eq!(referral.referral_type, ReferralType::Emergency);
}

#[test]
fn referral_threshold_is_respected() {
    let hypotheses = vec![hypothesis("myocardial_infarction", 0.2, UrgencyTier::Moderate)];
    let suggestions = generate_suggestions(&hypotheses, &PatientContext::default());
    assert!(suggestions[0].referral.is_none());
}

#[test]
fn urgency_score_scales_with_tier_and_age() {
    let base = generate_suggestions(
        &[hypothesis("a", 0.5, UrgencyTier::Critical)],
        &PatientContext::default(),
    );
    assert!((base[0].urgency_score - 0.5).abs() < 1e-9);

    let high = generate_suggestions(
        &[hypothesis("a", 0.5, UrgencyTier::High)],
        &PatientContext::default(),
    );
    assert!((high[0].urgency_score - 0.4).abs() < 1e-9);

    let elderly = PatientContext {
        age: Some(80),
        ..PatientContext::default()
    };
    let adjusted = generate_suggestions(&[hypothesis("a", 0.5, UrgencyTier::Critical)], &elderly);
    assert!((adjusted[0].urgency_score - 0.55).abs() < 1e-9);

    let pediatric = PatientContext {
        age: Some(10),
        ..PatientContext::default()
    };
    let adjusted = generate_suggestions(&[hypothesis("a", 0.5, UrgencyTier::Critical)], &pediatric);
    assert!((adjusted[0].urgency_score - 0.525).abs() < 1e-9);
}

#[test]
fn urgency_score_is_capped_at_one() {
    let elderly = PatientContext {
        age: Some(90),
        ..PatientContext::default()
    };
    let suggestions =
        generate_suggestions(&[hypothesis("a", 0.99, UrgencyTier::Critical)], &elderly);
    assert!(suggestions[0].urgency_score <= 1.0);
}
