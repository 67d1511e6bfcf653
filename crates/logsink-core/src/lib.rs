pub mod components;
pub mod error;
pub mod record;
pub mod topic_partition;

pub use components::Components;
pub use error::{Error, Result};
pub use record::{ParsedRecord, Record};
pub use topic_partition::TopicPartition;
