//! In-memory record store.
//!
//! One `MemoryStore` owns one ordered collection. Every read-modify-write
//! sequence runs under a single write-lock acquisition so concurrent
//! requests on the multi-threaded runtime cannot lose updates.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::Resource;

/// Ordered, lock-guarded collection of records.
pub struct MemoryStore<T: Resource> {
    records: RwLock<Vec<T>>,
}

impl<T: Resource> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, kept in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find(&self, id: i64) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Append a new record with id `max + 1` (or 1 when empty) stamped now.
    pub async fn insert(&self, input: T::Input) -> T {
        let mut records = self.records.write().await;
        let id = records.iter().map(Resource::id).max().unwrap_or(0) + 1;
        let record = T::build(id, Utc::now(), input);
        records.push(record.clone());
        record
    }

    /// Overwrite the record's fields, keeping its id and creation time.
    pub async fn replace(&self, id: i64, input: T::Input) -> Option<T> {
        let mut records = self.records.write().await;
        let slot = records.iter_mut().find(|record| record.id() == id)?;
        *slot = T::build(slot.id(), slot.created_at(), input);
        Some(slot.clone())
    }

    pub async fn remove(&self, id: i64) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Resource> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
