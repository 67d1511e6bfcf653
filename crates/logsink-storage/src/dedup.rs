//! Key-Based Deduplication
//!
//! This module implements `KeyDeduplicator` - a bounded-memory, best-effort
//! duplicate detector for record keys, keyed by topic partition.
//!
//! ## How It Works
//!
//! Each partition gets a fixed array of `limit` slots, allocated on first
//! use. A key hashes to exactly one slot:
//! - if the slot holds byte-identical key bytes, the record is a duplicate
//! - otherwise the key overwrites whatever was in the slot and the record is
//!   treated as new
//!
//! ## Approximate Membership
//!
//! This is not an exact set. Two distinct keys that hash to the same slot
//! evict each other, so a later repeat of the evicted key is reported as new
//! (a false negative). There are no false positives beyond genuine byte
//! equality at a retained slot. In exchange, memory is bounded at `limit`
//! slots per partition no matter how many distinct keys the stream carries.
//!
//! Keyless records carry no identity to deduplicate against and always pass
//! through as new, with no state change.
//!
//! ## Thread Safety
//!
//! Not Send/Sync-aware internally: the intended usage is one logical owner
//! per partition performing sequential calls. Operations on different
//! partitions never interfere; callers that share a partition across tasks
//! must serialize access themselves.

use bytes::Bytes;
use logsink_core::TopicPartition;
use logsink_observability::metrics::{DEDUP_CHECKS_TOTAL, DEDUP_DUPLICATES_TOTAL};
use std::collections::HashMap;

/// Bounded-memory duplicate detector for record keys
pub struct KeyDeduplicator {
    limit: usize,
    tables: HashMap<TopicPartition, Vec<Option<Bytes>>>,
}

impl KeyDeduplicator {
    /// Create a deduplicator with `limit` slots per partition.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn new(limit: usize) -> Self {
        assert!(limit > 0, "dedup slot limit must be positive");
        Self {
            limit,
            tables: HashMap::new(),
        }
    }

    /// Check whether `key` was already seen on this partition, recording it
    /// as seen if not.
    ///
    /// A `None` or empty key always returns `false` and leaves the table
    /// untouched.
    pub fn is_present(&mut self, topic_partition: &TopicPartition, key: Option<&Bytes>) -> bool {
        let key = match key {
            Some(key) if !key.is_empty() => key,
            _ => return false,
        };

        DEDUP_CHECKS_TOTAL
            .with_label_values(&[
                &topic_partition.topic,
                &topic_partition.partition.to_string(),
            ])
            .inc();

        let limit = self.limit;
        let table = self
            .tables
            .entry(topic_partition.clone())
            .or_insert_with(|| vec![None; limit]);

        let position = crc32fast::hash(key) as usize % limit;
        match &table[position] {
            Some(candidate) if candidate == key => {
                tracing::debug!(
                    topic_partition = %topic_partition,
                    key = ?key,
                    "duplicate key"
                );
                DEDUP_DUPLICATES_TOTAL
                    .with_label_values(&[
                        &topic_partition.topic,
                        &topic_partition.partition.to_string(),
                    ])
                    .inc();
                true
            }
            _ => {
                table[position] = Some(key.clone());
                false
            }
        }
    }

    /// Discard all retained keys for one partition.
    ///
    /// Used to realign dedup state with a checkpoint or rewind boundary:
    /// once records are re-consumed from an earlier offset, the retained
    /// history is meaningless. Other partitions are unaffected.
    pub fn reset(&mut self, topic_partition: &TopicPartition) {
        if let Some(table) = self.tables.get_mut(topic_partition) {
            table.fill(None);
        }
    }

    /// Slot capacity shared by every partition table
    pub fn limit(&self) -> usize {
        self.limit
    }
}
