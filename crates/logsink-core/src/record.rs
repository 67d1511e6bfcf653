//! Record Data Structures
//!
//! This module defines the `Record` type - a single message consumed from the
//! partitioned source log - and `ParsedRecord`, a record paired with the
//! `Components` extracted from its content.
//!
//! ## Structure
//! Each record contains:
//! - **topic**: the source topic name
//! - **partition**: the source log partition the record came from
//! - **offset**: the record's offset within that partition
//! - **timestamp**: when the record was created (milliseconds since epoch)
//! - **key**: optional partitioning key (arbitrary bytes)
//! - **value**: the payload (arbitrary bytes)
//!
//! ## Design Decisions
//! - Uses `bytes::Bytes` for zero-copy operations (cloning a record does not
//!   copy the payload)
//! - Key is optional: keyless records are legal and are exempt from
//!   deduplication
//! - Offset is u64 to support very large streams

use crate::components::Components;
use crate::topic_partition::TopicPartition;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single record consumed from the source log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Source topic
    pub topic: String,

    /// Source log partition
    pub partition: u32,

    /// Offset of this record in the partition
    pub offset: u64,

    /// Timestamp in milliseconds since epoch
    pub timestamp: u64,

    /// Optional key
    pub key: Option<Bytes>,

    /// Value (payload)
    pub value: Bytes,
}

impl Record {
    pub fn new(
        topic: impl Into<String>,
        partition: u32,
        offset: u64,
        timestamp: u64,
        key: Option<Bytes>,
        value: Bytes,
    ) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
            timestamp,
            key,
            value,
        }
    }

    /// The (topic, partition) pair this record belongs to
    pub fn topic_partition(&self) -> TopicPartition {
        TopicPartition::new(self.topic.clone(), self.partition)
    }

    /// Estimate the size of this record in bytes
    pub fn estimated_size(&self) -> usize {
        8 + // offset
        8 + // timestamp
        self.topic.len() +
        self.key.as_ref().map(|k| k.len()).unwrap_or(0) +
        self.value.len()
    }
}

/// A record that has been processed by a parser that extracted path and
/// filename components from its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// The original record
    pub record: Record,

    /// Components extracted from the record content
    pub components: Components,
}

impl ParsedRecord {
    pub fn new(record: Record, components: Components) -> Self {
        Self { record, components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_partition() {
        let record = Record::new("orders", 2, 100, 1_700_000_000_000, None, Bytes::from("payload"));
        assert_eq!(record.topic_partition(), TopicPartition::new("orders", 2));
    }

    #[test]
    fn test_carries_timestamp() {
        let record = Record::new("orders", 0, 0, 1_700_000_000_000, None, Bytes::from("payload"));
        assert_eq!(record.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_estimated_size() {
        let record = Record::new(
            "orders",
            0,
            0,
            1_700_000_000_000,
            Some(Bytes::from("key")),
            Bytes::from("value"),
        );
        // offset + timestamp + topic + key + value
        assert_eq!(record.estimated_size(), 8 + 8 + 6 + 3 + 5);
    }

    #[test]
    fn test_keyless_record() {
        let record = Record::new("orders", 0, 0, 0, None, Bytes::from("value"));
        assert!(record.key.is_none());
        assert_eq!(record.estimated_size(), 8 + 8 + 6 + 5);
    }
}
