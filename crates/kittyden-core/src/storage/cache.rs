//! Short-lived read cache in front of the key-value store.
//!
//! Repeated balance lookups within a single interaction would otherwise
//! hit SQLite every time. Entries expire after a small TTL and every
//! local write must call [`ReadCache::invalidate`]; the cache is a
//! read-path optimization only and never a source of truth.

use std::collections::HashMap;
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Timestamp-invalidated read cache for kv values.
///
/// Passed by reference into the stores that use it. There is deliberately
/// no global instance.
#[derive(Debug)]
pub struct ReadCache {
    ttl: Duration,
    entries: HashMap<String, (String, Instant)>,
}

impl Default for ReadCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadCache {
    /// Create a cache with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Get a cached value if it is still fresh.
    pub fn get(&self, key: &str) -> Option<&str> {
        let (value, stored_at) = self.entries.get(key)?;
        if stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(value)
    }

    /// Store a value read from the underlying store.
    pub fn put(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), (value.to_string(), Instant::now()));
    }

    /// Drop a key. Must be called on every write to the underlying store.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
