use std::collections::HashMap;

use parking_lot::RwLock;

use crate::BookMetadata;

/// Key-value store for normalized metadata records.
///
/// Entries are permanently valid once written; there is no TTL and no
/// eviction. Lifecycle is the host application's responsibility.
pub trait MetadataCache: Send + Sync {
    fn get(&self, volume_id: &str) -> Option<BookMetadata>;
    fn insert(&self, volume_id: &str, metadata: BookMetadata);
}

/// Process-wide in-memory cache.
///
/// Shared across tasks behind an `Arc`; the lock only protects the map,
/// it does not coalesce concurrent misses for the same identifier.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, BookMetadata>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataCache for MemoryCache {
    fn get(&self, volume_id: &str) -> Option<BookMetadata> {
        self.entries.read().get(volume_id).cloned()
    }

    fn insert(&self, volume_id: &str, metadata: BookMetadata) {
        self.entries.write().insert(volume_id.to_string(), metadata);
    }
}

/// Cache that never stores anything, for environments without a usable
/// store. Every lookup misses, so every fetch goes to the network.
pub struct NoopCache;

impl MetadataCache for NoopCache {
    fn get(&self, _volume_id: &str) -> Option<BookMetadata> {
        None
    }

    fn insert(&self, _volume_id: &str, _metadata: BookMetadata) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> BookMetadata {
        BookMetadata {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        assert!(cache.get("abc").is_none());

        cache.insert("abc", record("Dune"));
        assert_eq!(cache.get("abc").unwrap().title, "Dune");
        assert!(cache.get("def").is_none());
    }

    #[test]
    fn test_memory_cache_overwrites() {
        let cache = MemoryCache::new();
        cache.insert("abc", record("Dune"));
        cache.insert("abc", record("Dune Messiah"));
        assert_eq!(cache.get("abc").unwrap().title, "Dune Messiah");
    }

    #[test]
    fn test_noop_cache_never_stores() {
        let cache = NoopCache;
        cache.insert("abc", record("Dune"));
        assert!(cache.get("abc").is_none());
    }
}
