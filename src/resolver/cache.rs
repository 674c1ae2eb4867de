use super::{InputConditions, resolve_input_conditions};
use crate::schema::NodeSchema;
use ahash::AHashMap;
use std::sync::{Arc, Mutex, Weak};

struct CacheEntry {
    schema: Weak<NodeSchema>,
    conditions: Arc<InputConditions>,
}

/// Memoizes `resolve_input_conditions` per schema object.
///
/// Entries are keyed by the identity of the shared schema, not by its id, so a
/// reloaded schema with the same id is resolved again. Entries of dropped
/// schemas are pruned whenever a new schema is resolved.
#[derive(Default)]
pub struct ConditionResolver {
    cache: Mutex<AHashMap<usize, CacheEntry>>,
}

impl ConditionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input conditions of `schema`, computing them on first use.
    ///
    /// Repeated calls with the same schema object return the same `Arc`.
    pub fn resolve(&self, schema: &Arc<NodeSchema>) -> Arc<InputConditions> {
        let key = Arc::as_ptr(schema) as usize;
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(entry) = cache.get(&key) {
            // The address may have been reused by a newer schema.
            if entry.schema.upgrade().is_some_and(|s| Arc::ptr_eq(&s, schema)) {
                return Arc::clone(&entry.conditions);
            }
        }

        log::debug!("Resolving input conditions of schema '{}'", schema.schema_id);
        let conditions = Arc::new(resolve_input_conditions(schema));
        if !conditions.duplicates().is_empty() {
            log::warn!(
                "Schema '{}' references inputs {:?} more than once in its group layout",
                schema.schema_id,
                conditions.duplicates()
            );
        }

        cache.retain(|_, entry| entry.schema.strong_count() > 0);
        cache.insert(
            key,
            CacheEntry {
                schema: Arc::downgrade(schema),
                conditions: Arc::clone(&conditions),
            },
        );
        conditions
    }

    /// Number of live cache entries.
    pub fn cached(&self) -> usize {
        match self.cache.lock() {
            Ok(cache) => cache.values().filter(|e| e.schema.strong_count() > 0).count(),
            Err(poisoned) => poisoned
                .into_inner()
                .values()
                .filter(|e| e.schema.strong_count() > 0)
                .count(),
        }
    }
}
