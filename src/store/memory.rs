//! In-memory record store
//!
//! A `Vec` guarded by an `RwLock`: the write lock serializes inserts and
//! deletes (preserving the one-record-per-value invariant under concurrent
//! requests), and a single read lock acquisition gives every read a
//! consistent snapshot. Insertion order is the stable listing order.

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;
use super::RecordStore;
use crate::analysis::sha256_hex;

/// In-memory implementation of [`RecordStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StringRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<StringRecord>> {
        // A poisoned lock means a panic mid-operation; the store holds no
        // partially-built records, so continuing with the data is sound
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<StringRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, value: &str) -> StoreResult<StringRecord> {
        // Build the record outside the critical section; only the
        // duplicate check and the push happen under the write lock
        let record = StringRecord::analyze(value);

        let mut records = self.write();
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Duplicate { hash: record.id });
        }
        records.push(record.clone());
        Ok(record)
    }

    fn get_by_value(&self, value: &str) -> StoreResult<StringRecord> {
        self.read()
            .iter()
            .find(|r| r.value == value)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_by_hash(&self, hash: &str) -> StoreResult<StringRecord> {
        self.read()
            .iter()
            .find(|r| r.id == hash)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn delete(&self, value: &str) -> StoreResult<StringRecord> {
        let hash = sha256_hex(value);
        let mut records = self.write();
        let idx = records
            .iter()
            .position(|r| r.id == hash)
            .ok_or(StoreError::NotFound)?;
        Ok(records.remove(idx))
    }

    fn list_all(&self) -> Vec<StringRecord> {
        self.read().clone()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();

        let record = store.insert("racecar").unwrap();
        assert!(record.properties.is_palindrome);

        let by_value = store.get_by_value("racecar").unwrap();
        assert_eq!(by_value, record);

        let by_hash = store.get_by_hash(&record.id).unwrap();
        assert_eq!(by_hash, record);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = MemoryStore::new();
        store.insert("hello").unwrap();

        let err = store.insert("hello").unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        // Store size unchanged by the failed insert
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_value() {
        let store = MemoryStore::new();
        assert_eq!(store.get_by_value("nope"), Err(StoreError::NotFound));
        assert_eq!(store.get_by_hash("deadbeef"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_delete_is_total_and_not_idempotent() {
        let store = MemoryStore::new();
        store.insert("hello").unwrap();

        let deleted = store.delete("hello").unwrap();
        assert_eq!(deleted.value, "hello");
        assert!(store.is_empty());

        // Second delete of the same value is NotFound; store unchanged
        assert_eq!(store.delete("hello"), Err(StoreError::NotFound));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for value in ["first", "second", "third"] {
            store.insert(value).unwrap();
        }
        store.delete("second").unwrap();
        store.insert("fourth").unwrap();

        let values: Vec<String> = store.list_all().into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["first", "third", "fourth"]);
    }

    #[test]
    fn test_empty_string_is_storable() {
        let store = MemoryStore::new();
        let record = store.insert("").unwrap();
        assert_eq!(record.properties.length, 0);
        assert_eq!(store.get_by_value("").unwrap(), record);
    }
}
