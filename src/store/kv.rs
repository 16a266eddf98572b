//! The shared key-value map and request counter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::store::error::StoreError;

/// Point-in-time view of the store counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of counted requests.
    pub requests: u64,
    /// Number of keys in the map.
    pub database_size: usize,
}

#[derive(Debug, Default)]
struct Inner {
    data: HashMap<String, String>,
    requests: u64,
}

impl Inner {
    fn stats(&self) -> StoreStats {
        StoreStats {
            requests: self.requests,
            database_size: self.data.len(),
        }
    }
}

/// Thread-safe in-memory key-value store.
///
/// Every operation takes the single internal lock for its whole duration, so
/// operations are linearizable and never observe a partial mutation.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

impl Store {
    /// Create an empty store with a zero request counter.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation panics while holding the guard, so a poisoned lock
        // still holds consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge every entry into the map, overwriting existing keys.
    ///
    /// Counts as one request regardless of how many entries are given.
    pub fn put_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut inner = self.lock();
        inner.data.extend(entries);
        inner.requests += 1;
    }

    /// Return a copy of the whole map. Counts as one request.
    pub fn get_all(&self) -> HashMap<String, String> {
        let mut inner = self.lock();
        let snapshot = inner.data.clone();
        inner.requests += 1;
        snapshot
    }

    /// Remove `key` from the map.
    ///
    /// Only a successful removal is counted. An empty key is rejected before
    /// the lookup.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }

        let mut inner = self.lock();
        if inner.data.remove(key).is_none() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        inner.requests += 1;
        Ok(())
    }

    /// Return the counters as they were before this call, then count it.
    pub fn stats(&self) -> StoreStats {
        let mut inner = self.lock();
        let stats = inner.stats();
        inner.requests += 1;
        stats
    }

    /// Return the counters without counting the read.
    pub fn current_stats(&self) -> StoreStats {
        self.lock().stats()
    }
}
