//! In-memory history store.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::{ConversionRecord, NewRecord, PartitionKey};
use crate::error::Result;
use crate::port::HistoryStore;

type Partition = Arc<Mutex<VecDeque<ConversionRecord>>>;

/// Volatile [`HistoryStore`] for tests and embedders that need no persistence.
///
/// Each partition sits behind its own mutex, so writers to different
/// partitions never contend. Records are kept oldest first.
#[derive(Debug)]
pub struct MemoryHistoryStore {
    partitions: DashMap<PartitionKey, Partition>,
    next_id: AtomicI64,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self {
            partitions: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryHistoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, key: PartitionKey) -> Partition {
        Arc::clone(self.partitions.entry(key).or_default().value())
    }

    fn existing(&self, key: PartitionKey) -> Option<Partition> {
        self.partitions.get(&key).map(|p| Arc::clone(p.value()))
    }
}

impl HistoryStore for MemoryHistoryStore {
    async fn insert_and_trim(&self, record: NewRecord, max_size: usize) -> Result<ConversionRecord> {
        let partition = self.partition(record.conversion.partition);
        let mut entries = partition.lock();

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = ConversionRecord::from_new(id, record);
        entries.push_back(stored.clone());
        while entries.len() > max_size {
            entries.pop_front();
        }
        Ok(stored)
    }

    async fn list_all(&self, key: PartitionKey) -> Result<Vec<ConversionRecord>> {
        Ok(self
            .existing(key)
            .map(|p| {
                let entries = p.lock();
                entries.iter().rev().cloned().collect()
            })
            .unwrap_or_default())
    }

    async fn latest(&self, key: PartitionKey) -> Result<Option<ConversionRecord>> {
        Ok(self.existing(key).and_then(|p| {
            let entries = p.lock();
            entries.back().cloned()
        }))
    }

    async fn clear(&self, key: PartitionKey) -> Result<usize> {
        Ok(self.existing(key).map_or(0, |p| {
            let mut entries = p.lock();
            let removed = entries.len();
            entries.clear();
            removed
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::testkit::record::new_record;

    const SPEED: PartitionKey = PartitionKey::Unit(Category::Speed);

    #[tokio::test]
    async fn ids_increase_across_partitions() {
        let store = MemoryHistoryStore::new();
        let a = store.insert_and_trim(new_record(SPEED, "1", 1), 5).await.unwrap();
        let b = store
            .insert_and_trim(new_record(PartitionKey::Currency, "1", 2), 5)
            .await
            .unwrap();
        let c = store.insert_and_trim(new_record(SPEED, "2", 3), 5).await.unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[tokio::test]
    async fn trims_to_cap_keeping_newest() {
        let store = MemoryHistoryStore::new();
        for i in 1..=4 {
            store
                .insert_and_trim(new_record(SPEED, &i.to_string(), i), 2)
                .await
                .unwrap();
        }
        let records = store.list_all(SPEED).await.unwrap();
        let amounts: Vec<&str> = records.iter().map(|r| r.conversion.from_amount.as_str()).collect();
        assert_eq!(amounts, vec!["4", "3"]);
    }

    #[tokio::test]
    async fn unknown_partition_is_empty() {
        let store = MemoryHistoryStore::new();
        assert!(store.list_all(SPEED).await.unwrap().is_empty());
        assert_eq!(store.latest(SPEED).await.unwrap(), None);
        assert_eq!(store.clear(SPEED).await.unwrap(), 0);
    }
}
