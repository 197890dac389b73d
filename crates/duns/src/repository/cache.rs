//! In-memory cache state owned by the repository.

use std::collections::HashMap;

use duns_core::dun::{sort_duns_by_id, Dun};

/// The repository's cache of duns, keyed by id.
///
/// The cache starts `Uninitialized` and becomes `Populated` on the first
/// successful fetch or the first write. It never goes back: clearing a
/// populated cache leaves it `Populated` with zero entries. Readers that
/// short-circuit on the cache check [`CacheState::is_empty`], which treats
/// both states alike when there is nothing to serve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CacheState {
    #[default]
    Uninitialized,
    Populated(HashMap<String, Dun>),
}

impl CacheState {
    /// Returns true once the cache has been filled or written to.
    pub fn is_populated(&self) -> bool {
        matches!(self, CacheState::Populated(_))
    }

    /// Returns true if there is nothing to serve from the cache.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cached duns.
    pub fn len(&self) -> usize {
        match self {
            CacheState::Uninitialized => 0,
            CacheState::Populated(duns) => duns.len(),
        }
    }

    /// Returns a copy of the cached dun, if present.
    pub fn get(&self, id: &str) -> Option<Dun> {
        match self {
            CacheState::Uninitialized => None,
            CacheState::Populated(duns) => duns.get(id).cloned(),
        }
    }

    /// Returns a copy of every cached dun, sorted by id.
    pub fn snapshot(&self) -> Vec<Dun> {
        let mut duns: Vec<Dun> = match self {
            CacheState::Uninitialized => Vec::new(),
            CacheState::Populated(duns) => duns.values().cloned().collect(),
        };
        sort_duns_by_id(&mut duns);
        duns
    }

    /// Inserts or replaces a dun, populating the cache if needed.
    pub fn upsert(&mut self, dun: Dun) {
        match self {
            CacheState::Populated(duns) => {
                duns.insert(dun.id.clone(), dun);
            }
            CacheState::Uninitialized => {
                *self = CacheState::Populated(HashMap::from([(dun.id.clone(), dun)]));
            }
        }
    }

    /// Replaces the whole content with the given duns.
    pub fn replace_all(&mut self, duns: &[Dun]) {
        *self = CacheState::Populated(
            duns.iter()
                .map(|dun| (dun.id.clone(), dun.clone()))
                .collect(),
        );
    }

    /// Removes a dun by id.
    pub fn remove(&mut self, id: &str) {
        if let CacheState::Populated(duns) = self {
            duns.remove(id);
        }
    }

    /// Removes every completed dun.
    pub fn remove_completed(&mut self) {
        if let CacheState::Populated(duns) = self {
            duns.retain(|_, dun| !dun.completed);
        }
    }

    /// Drops every entry. A populated cache stays populated.
    pub fn clear(&mut self) {
        if let CacheState::Populated(duns) = self {
            duns.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dun(id: &str, completed: bool) -> Dun {
        Dun::new(id, "").with_id(id).with_completed(completed)
    }

    #[test]
    fn test_starts_uninitialized_and_empty() {
        let cache = CacheState::default();

        assert!(!cache.is_populated());
        assert!(cache.is_empty());
        assert!(cache.snapshot().is_empty());
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_upsert_populates() {
        let mut cache = CacheState::default();

        cache.upsert(dun("a", false));

        assert!(cache.is_populated());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), Some(dun("a", false)));
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut cache = CacheState::default();
        cache.upsert(dun("a", false));

        cache.upsert(dun("a", true));

        assert_eq!(cache.len(), 1);
        assert!(cache.get("a").unwrap().completed);
    }

    #[test]
    fn test_snapshot_is_sorted_by_id() {
        let mut cache = CacheState::default();
        cache.upsert(dun("c", false));
        cache.upsert(dun("a", false));
        cache.upsert(dun("b", false));

        let ids: Vec<_> = cache.snapshot().into_iter().map(|d| d.id).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_all_drops_previous_entries() {
        let mut cache = CacheState::default();
        cache.upsert(dun("old", false));

        cache.replace_all(&[dun("a", false), dun("b", true)]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("old"), None);
    }

    #[test]
    fn test_replace_all_with_nothing_is_populated_empty() {
        let mut cache = CacheState::default();

        cache.replace_all(&[]);

        assert!(cache.is_populated());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_completed() {
        let mut cache = CacheState::default();
        cache.replace_all(&[dun("a", false), dun("b", true)]);

        cache.remove_completed();

        assert_eq!(cache.snapshot(), vec![dun("a", false)]);
    }

    #[test]
    fn test_clear_keeps_populated() {
        let mut cache = CacheState::default();
        cache.upsert(dun("a", false));

        cache.clear();

        assert!(cache.is_populated());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_mutations_on_uninitialized_do_not_populate() {
        let mut cache = CacheState::default();

        cache.remove("a");
        cache.remove_completed();
        cache.clear();

        assert_eq!(cache, CacheState::Uninitialized);
    }

    #[test]
    fn test_get_returns_independent_copy() {
        let mut cache = CacheState::default();
        cache.upsert(dun("a", false));

        let mut copy = cache.get("a").unwrap();
        copy.title = "changed".to_string();

        assert_eq!(cache.get("a").unwrap().title, "a");
    }
}
