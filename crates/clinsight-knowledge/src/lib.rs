//! clinsight-knowledge
//!
//! Static clinical knowledge: prior probabilities, likelihood-ratio tables,
//! condition profiles, test algorithms, referral rules, and risk keyword
//! tables. Pure data — no AWS dependency. Tables are built once behind
//! `LazyLock` and never mutated afterwards, so concurrent readers need no
//! locking.

pub mod cache;
pub mod conditions;
pub mod error;
pub mod likelihood;
pub mod priors;
pub mod referrals;
pub mod risk_tables;
pub mod test_algorithms;

use conditions::ConditionProfile;

/// Read-only access to condition profiles.
///
/// The reasoning engine consumes profiles through this trait so a miss can
/// be handled locally (the condition is skipped) and so tests can substitute
/// a provider that always misses.
pub trait ConditionKnowledge: Send + Sync {
    /// Look up the profile for a condition key. `None` is non-fatal.
    fn profile(&self, key: &str) -> Option<ConditionProfile>;
}

/// The built-in knowledge base backed by the static tables in this crate,
/// fronted by a bounded LRU cache.
pub struct ClinicalKnowledgeBase {
    cache: cache::ProfileCache,
}

impl ClinicalKnowledgeBase {
    pub fn new() -> Self {
        Self {
            cache: cache::ProfileCache::with_capacity(64),
        }
    }
}

impl Default for ClinicalKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionKnowledge for ClinicalKnowledgeBase {
    fn profile(&self, key: &str) -> Option<ConditionProfile> {
        if let Some(hit) = self.cache.get(key) {
            return Some(hit);
        }
        let profile = conditions::lookup(key)?;
        self.cache.put(key, profile.clone());
        Some(profile)
    }
}
