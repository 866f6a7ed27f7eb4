//! History store port.
//!
//! The conversion history is a set of independent partitions (one per unit
//! category, one for currency), each a FIFO log capped at a fixed size.

use std::future::Future;

use crate::domain::{ConversionRecord, NewRecord, PartitionKey};
use crate::error::Result;

/// Bounded, partitioned conversion history.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `insert_and_trim` is atomic per partition: no reader ever observes the
///   insert without the trim
/// - Eviction is by insertion order, never by timestamp
pub trait HistoryStore: Send + Sync {
    /// Append `record` to its partition, then evict that partition's oldest
    /// entries until at most `max_size` remain. Returns the stored record.
    fn insert_and_trim(
        &self,
        record: NewRecord,
        max_size: usize,
    ) -> impl Future<Output = Result<ConversionRecord>> + Send;

    /// Every record of `key`, newest first.
    fn list_all(
        &self,
        key: PartitionKey,
    ) -> impl Future<Output = Result<Vec<ConversionRecord>>> + Send;

    /// The most recently inserted record of `key`.
    fn latest(
        &self,
        key: PartitionKey,
    ) -> impl Future<Output = Result<Option<ConversionRecord>>> + Send;

    /// Remove every record of `key`. Returns how many were removed.
    fn clear(&self, key: PartitionKey) -> impl Future<Output = Result<usize>> + Send;
}
