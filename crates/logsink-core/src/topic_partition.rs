//! Topic Partition Identifier
//!
//! A `(topic, partition)` pair naming one sub-stream of the source log. Used
//! as the lookup key for per-partition state, most notably the key
//! deduplicator's slot tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single partition of a topic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicPartition {
    /// Topic name
    pub topic: String,

    /// Partition ID within the topic
    pub partition: u32,
}

impl TopicPartition {
    pub fn new(topic: impl Into<String>, partition: u32) -> Self {
        Self {
            topic: topic.into(),
            partition,
        }
    }
}

impl fmt::Display for TopicPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.topic, self.partition)
    }
}
