use clinsight_knowledge::{
    cache::ProfileCache, conditions, likelihood, priors, referrals, risk_tables, test_algorithms,
    ClinicalKnowledgeBase, ConditionKnowledge,
};

#[test]
fn priors_are_strictly_between_zero_and_one() {
    for (condition, prior) in priors::table() {
        assert!(
            *prior > 0.0 && *prior < 1.0,
            "prior for {condition} out of range: {prior}"
        );
    }
}

#[test]
fn every_prior_condition_has_a_profile() {
    for condition in priors::table().keys() {
        assert!(
            conditions::lookup(condition).is_some(),
            "missing profile for {condition}"
        );
    }
}

#[test]
fn likelihood_ratios_are_strictly_positive() {
    for (finding, per_condition) in likelihood::table() {
        for (condition, ratio) in per_condition {
            assert!(
                ratio.positive > 0.0,
                "non-positive positive ratio for ({finding}, {condition})"
            );
            assert!(
                ratio.negative > 0.0,
                "non-positive negative ratio for ({finding}, {condition})"
            );
        }
    }
}

#[test]
fn likelihood_conditions_all_have_priors() {
    for per_condition in likelihood::table().values() {
        for condition in per_condition.keys() {
            assert!(
                priors::prior(condition).is_some(),
                "likelihood entry references unknown condition {condition}"
            );
        }
    }
}

#[test]
fn test_algorithms_reference_known_conditions() {
    for algorithm in test_algorithms::all() {
        assert!(
            priors::prior(algorithm.condition).is_some(),
            "test algorithm references unknown condition {}",
            algorithm.condition
        );
    }
}

#[test]
fn referral_rules_reference_known_conditions() {
    for rule in referrals::rules() {
        for condition in rule.conditions {
            assert!(
                priors::prior(condition).is_some(),
                "referral rule for {} references unknown condition {condition}",
                rule.specialty
            );
        }
        assert!(rule.min_probability > 0.0 && rule.min_probability < 1.0);
    }
}

#[test]
fn profiles_carry_codes_and_findings() {
    for profile in conditions::all() {
        assert!(!profile.icd_codes.is_empty(), "{} has no codes", profile.key);
        assert!(
            !profile.typical_findings.is_empty(),
            "{} has no typical findings",
            profile.key
        );
    }
}

#[test]
fn risk_table_tokens_are_canonical() {
    let canonical =
        |t: &str| t.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    for combo in risk_tables::EMERGENCY_COMBINATIONS {
        for token in *combo {
            assert!(canonical(token), "non-canonical token {token}");
        }
    }
    for token in risk_tables::HIGH_RISK_SYMPTOMS {
        assert!(canonical(token), "non-canonical token {token}");
    }
}

#[test]
fn keyword_matching_is_case_insensitive() {
    assert!(risk_tables::keyword_matches("Type 2 Diabetes", "diabetes"));
    assert!(risk_tables::keyword_matches("WARFARIN 5mg", "warfarin"));
    assert!(!risk_tables::keyword_matches("lisinopril", "warfarin"));
}

#[test]
fn knowledge_base_serves_and_caches_profiles() {
    let kb = ClinicalKnowledgeBase::new();
    let first = kb.profile("myocardial_infarction").unwrap();
    let second = kb.profile("myocardial_infarction").unwrap();
    assert_eq!(first.key, second.key);
    assert_eq!(first.icd_codes, second.icd_codes);
    assert!(kb.profile("not_a_condition").is_none());
}

#[test]
fn profile_cache_is_bounded() {
    let cache = ProfileCache::with_capacity(2);
    let profile = |key: &str| conditions::lookup(key).unwrap();
    cache.put("myocardial_infarction", profile("myocardial_infarction"));
    cache.put("stroke", profile("stroke"));
    cache.put("sepsis", profile("sepsis"));
    assert_eq!(cache.len(), 2);
    // Least-recently-used entry was evicted.
    assert!(cache.get("myocardial_infarction").is_none());
    assert!(cache.get("sepsis").is_some());
}
