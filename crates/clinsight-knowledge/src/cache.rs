//! Bounded, thread-safe profile cache.
//!
//! Profile lookups are cheap clones of static data, but the cache keeps the
//! lookup path allocation-free for hot conditions and gives the knowledge
//! base a single, explicit memoization point instead of ad-hoc module-level
//! maps.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::conditions::ConditionProfile;

pub struct ProfileCache {
    inner: Mutex<LruCache<String, ConditionProfile>>,
}

impl ProfileCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &str) -> Option<ConditionProfile> {
        let mut cache = self.inner.lock().expect("profile cache poisoned");
        cache.get(key).cloned()
    }

    pub fn put(&self, key: &str, profile: ConditionProfile) {
        let mut cache = self.inner.lock().expect("profile cache poisoned");
        cache.put(key.to_string(), profile);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("profile cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
