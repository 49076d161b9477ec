//! Store implementation
//!
//! HashMap-based record table with RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{RestError, Result};
use crate::resource::Resource;

/// Thread-safe mapping from record id to record for one resource kind
pub struct Store<R: Resource> {
    /// Guarded mapping: never handed out outside a lock scope
    records: RwLock<HashMap<String, R>>,
}

impl<R: Resource> Store<R> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with `records`
    ///
    /// Records with an empty id are skipped.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let map = records
            .into_iter()
            .filter(|record| !record.id().is_empty())
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Insert a record (write lock)
    ///
    /// Overwrites any record with the same id. Returns the stored record.
    pub fn insert(&self, record: R) -> Result<R> {
        if record.id().is_empty() {
            return Err(RestError::EmptyId);
        }

        let key = record.id().to_string();
        self.records.write().insert(key, record.clone());

        Ok(record)
    }

    /// Get a record by id (read lock)
    pub fn get(&self, id: &str) -> Option<R> {
        self.records.read().get(id).cloned()
    }

    /// Snapshot of every record (read lock)
    ///
    /// Order is unspecified. The snapshot is taken under a single read
    /// lock so a concurrent insert is either fully in it or absent.
    pub fn list(&self) -> Vec<R> {
        let records = self.records.read();
        records.values().cloned().collect()
    }

    /// Number of distinct ids stored
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: Resource> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
