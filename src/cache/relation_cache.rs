use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::index::{PersonIndex, RelationRuleTable};
use crate::kinship::derive_relations;
use crate::model::{PersonId, RelationResult, ToPersonId};

struct Entry {
    stored_at: Instant,
    relations: Vec<RelationResult>,
}

/// Thread-safe LRU cache of derived relation lists
///
/// Keyed by person id. Entries older than the time-to-live are treated as
/// misses and evicted on access. The cache does not observe the person
/// collection: rebuild or `clear` it when the underlying records change.
pub struct RelationCache {
    cache: Mutex<LruCache<PersonId, Entry>>,
    ttl: Duration,
}

impl RelationCache {
    /// Create a new relation cache
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of relation lists to keep (0 is treated as 1)
    /// * `ttl` - How long a cached list stays valid
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Mutex::new(LruCache::new(cap)),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<PersonId, Entry>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the cached relations for a person, if present and not expired
    pub fn get(&self, id: PersonId) -> Option<Vec<RelationResult>> {
        let mut cache = self.lock();
        let expired = match cache.get(&id) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                return Some(entry.relations.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            cache.pop(&id);
        }
        None
    }

    /// Store the relations derived for a person
    pub fn put(&self, id: PersonId, relations: Vec<RelationResult>) {
        self.lock().put(
            id,
            Entry {
                stored_at: Instant::now(),
                relations,
            },
        );
    }

    /// Drop the entry for one person
    pub fn invalidate(&self, id: PersonId) {
        self.lock().pop(&id);
    }

    /// Relations for `id`, served from the cache when fresh.
    ///
    /// Ids that do not resolve yield an empty list and are not cached.
    pub fn cached_relations_for<K>(
        &self,
        id: &K,
        index: &PersonIndex,
        rules: &RelationRuleTable,
    ) -> Vec<RelationResult>
    where
        K: ToPersonId + ?Sized,
    {
        let Some(person) = id.to_person_id().and_then(|id| index.get(id)) else {
            return Vec::new();
        };
        let Some(id) = person.id else {
            return Vec::new();
        };
        if let Some(relations) = self.get(id) {
            log::debug!("Relation cache hit for {}", id);
            return relations;
        }
        log::debug!("Relation cache miss for {}", id);
        let relations = derive_relations(person, index, rules);
        self.put(id, relations.clone());
        relations
    }

    /// Get the current number of cached entries (expired ones included until touched)
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all entries from the cache
    pub fn clear(&self) {
        self.lock().clear();
    }
}
