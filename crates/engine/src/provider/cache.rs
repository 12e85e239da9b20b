//! Per-provider cache of last observed external values.
//!
//! Keys are added the first time the host asks for them and are never
//! evicted; the set of tokens configured in a session is small and fixed.

use crossmod_types::ComponentId;
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct ValueCache<V> {
    entries: IndexMap<ComponentId, IndexMap<String, V>>,
}

impl<V> Default for ValueCache<V> {
    fn default() -> Self {
        Self { entries: IndexMap::new() }
    }
}

impl<V: PartialEq> ValueCache<V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Cached value for `(component, key)`, fetching and storing it on miss.
    pub(crate) fn get_or_insert_with(&mut self, component: &ComponentId, key: &str, fetch: impl FnOnce() -> V) -> &V {
        let keys = self.entries.entry(component.clone()).or_default();
        if !keys.contains_key(key) {
            debug!(component = %component, key, "provider cache miss");
            keys.insert(key.to_string(), fetch());
        }
        &keys[key]
    }

    /// Re-fetches every cached entry, storing values that differ from the
    /// last observation. Returns the number of entries that changed.
    pub(crate) fn refresh(&mut self, mut fetch: impl FnMut(&ComponentId, &str) -> V) -> usize {
        let mut changed = 0;
        for (component, keys) in self.entries.iter_mut() {
            for (key, last_observed) in keys.iter_mut() {
                let current = fetch(component, key);
                if *last_observed != current {
                    debug!(component = %component, key = %key, "external value changed");
                    *last_observed = current;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Number of cached `(component, key)` entries.
    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }
}
