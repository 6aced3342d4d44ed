//! Keyed Query Cache
//!
//! An explicit key -> entry mapping with a small per-entry state machine,
//! in place of an ambient process-wide cache. Concurrent identical reads
//! collapse onto one in-flight fetch; invalidation keeps the last value
//! visible until the re-fetch lands.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ApiError;

/// What a view sees for a given key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<V> {
    /// No data yet; a fetch is in flight or about to be issued.
    Loading,
    /// Fresh server-confirmed data.
    Ready(V),
    /// Stale data shown while a re-fetch is in flight.
    Refreshing(V),
    /// The fetch rejected; stays failed until the key is invalidated.
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
enum Entry<V> {
    /// A fetch is in flight. `prev` is the stale value still rendered;
    /// `invalidated` records an invalidation that raced the fetch, so the
    /// result must not be trusted as fresh.
    Fetching { prev: Option<V>, invalidated: bool },
    Ready(V),
    Stale(V),
    Failed(ApiError),
}

/// Injectable key -> value cache. Pure data structure: the reactive
/// wrapper lives in the query layer.
#[derive(Debug)]
pub struct CacheMap<K, V> {
    entries: HashMap<K, Entry<V>>,
}

impl<K, V> Default for CacheMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> CacheMap<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Render state for a key. An unknown key reads as `Loading` because
    /// the first observer is about to issue its fetch.
    pub fn state(&self, key: K) -> QueryState<V> {
        match self.entries.get(&key) {
            None => QueryState::Loading,
            Some(Entry::Fetching { prev: None, .. }) => QueryState::Loading,
            Some(Entry::Fetching {
                prev: Some(value), ..
            }) => QueryState::Refreshing(value.clone()),
            Some(Entry::Ready(value)) => QueryState::Ready(value.clone()),
            Some(Entry::Stale(value)) => QueryState::Refreshing(value.clone()),
            Some(Entry::Failed(err)) => QueryState::Failed(err.clone()),
        }
    }

    /// Whether an observer of this key should issue a fetch now. False
    /// while one is already in flight, so identical concurrent reads
    /// deduplicate; false for failed entries, which never auto-retry.
    pub fn wants_fetch(&self, key: K) -> bool {
        matches!(self.entries.get(&key), None | Some(Entry::Stale(_)))
    }

    /// Record that a fetch was issued, carrying any stale value forward
    /// for display.
    pub fn begin(&mut self, key: K) {
        match self.entries.remove(&key) {
            None => {
                self.entries.insert(
                    key,
                    Entry::Fetching {
                        prev: None,
                        invalidated: false,
                    },
                );
            }
            Some(Entry::Stale(value)) => {
                self.entries.insert(
                    key,
                    Entry::Fetching {
                        prev: Some(value),
                        invalidated: false,
                    },
                );
            }
            // Already fetching, ready, or failed: nothing to begin.
            Some(entry) => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Store a fetch result. If the key was invalidated while the fetch
    /// was in flight, the value lands stale so a follow-up re-fetch runs.
    pub fn resolve(&mut self, key: K, value: V) {
        let invalidated = matches!(
            self.entries.get(&key),
            Some(Entry::Fetching {
                invalidated: true,
                ..
            })
        );
        let entry = if invalidated {
            Entry::Stale(value)
        } else {
            Entry::Ready(value)
        };
        self.entries.insert(key, entry);
    }

    /// Record a fetch failure.
    pub fn reject(&mut self, key: K, error: ApiError) {
        self.entries.insert(key, Entry::Failed(error));
    }

    /// Mark a key stale so the next observer re-fetches. Ready values are
    /// kept for display; failed entries are dropped so the re-fetch gets a
    /// clean slate.
    pub fn invalidate(&mut self, key: K) {
        match self.entries.remove(&key) {
            Some(Entry::Ready(value)) | Some(Entry::Stale(value)) => {
                self.entries.insert(key, Entry::Stale(value));
            }
            Some(Entry::Fetching { prev, .. }) => {
                self.entries.insert(
                    key,
                    Entry::Fetching {
                        prev,
                        invalidated: true,
                    },
                );
            }
            Some(Entry::Failed(_)) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> CacheMap<i64, Vec<&'static str>> {
        CacheMap::new()
    }

    #[test]
    fn test_unknown_key_is_loading_and_wants_fetch() {
        let cache = cache();
        assert_eq!(cache.state(1), QueryState::Loading);
        assert!(cache.wants_fetch(1));
    }

    #[test]
    fn test_begin_deduplicates_concurrent_reads() {
        let mut cache = cache();
        cache.begin(1);
        // A second observer of the same key must not issue another fetch.
        assert!(!cache.wants_fetch(1));
        assert_eq!(cache.state(1), QueryState::Loading);
    }

    #[test]
    fn test_resolve_makes_key_ready() {
        let mut cache = cache();
        cache.begin(1);
        cache.resolve(1, vec!["Milk"]);
        assert_eq!(cache.state(1), QueryState::Ready(vec!["Milk"]));
        assert!(!cache.wants_fetch(1));
    }

    #[test]
    fn test_invalidate_keeps_stale_value_and_forces_refetch() {
        let mut cache = cache();
        cache.begin(1);
        cache.resolve(1, vec!["Milk"]);

        cache.invalidate(1);

        // The old value is still rendered while the re-fetch runs.
        assert_eq!(cache.state(1), QueryState::Refreshing(vec!["Milk"]));
        assert!(cache.wants_fetch(1));

        cache.begin(1);
        assert!(!cache.wants_fetch(1));
        assert_eq!(cache.state(1), QueryState::Refreshing(vec!["Milk"]));

        cache.resolve(1, vec!["Milk", "Bread"]);
        assert_eq!(cache.state(1), QueryState::Ready(vec!["Milk", "Bread"]));
    }

    #[test]
    fn test_reject_is_terminal_until_invalidated() {
        let mut cache = cache();
        cache.begin(1);
        cache.reject(1, ApiError::Failed("Failed to fetch grocery lists"));

        assert_eq!(
            cache.state(1),
            QueryState::Failed(ApiError::Failed("Failed to fetch grocery lists"))
        );
        // No automatic retry.
        assert!(!cache.wants_fetch(1));

        // Invalidation drops the failure so the next observer re-fetches.
        cache.invalidate(1);
        assert_eq!(cache.state(1), QueryState::Loading);
        assert!(cache.wants_fetch(1));
    }

    #[test]
    fn test_invalidate_during_fetch_marks_result_stale() {
        let mut cache = cache();
        cache.begin(1);
        cache.invalidate(1);

        // The in-flight response lands, but it predates the invalidation:
        // it is rendered, yet another fetch must follow.
        cache.resolve(1, vec!["Milk"]);
        assert_eq!(cache.state(1), QueryState::Refreshing(vec!["Milk"]));
        assert!(cache.wants_fetch(1));

        cache.begin(1);
        cache.resolve(1, vec!["Milk", "Bread"]);
        assert_eq!(cache.state(1), QueryState::Ready(vec!["Milk", "Bread"]));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = cache();
        cache.begin(1);
        cache.resolve(1, vec!["Milk"]);
        cache.begin(2);
        cache.resolve(2, vec!["Bread"]);

        cache.invalidate(1);

        assert!(cache.wants_fetch(1));
        assert!(!cache.wants_fetch(2));
        assert_eq!(cache.state(2), QueryState::Ready(vec!["Bread"]));
    }
}
