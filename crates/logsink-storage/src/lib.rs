//! LogSink Storage Layer
//!
//! This crate implements the storage side of LogSink - the component that
//! materializes records consumed from a partitioned log as files under a
//! hierarchical storage path.
//!
//! ## Main Components
//!
//! ### LogFilePath
//! The identity of one log file, with a canonical bidirectional encoding to
//! and from a path string:
//!
//! ```text
//! prefix/topic/partition1/.../partitionN/generation_partition_offset[ext]
//! ```
//!
//! Recovery tooling re-derives identities purely from paths on disk, so the
//! encoding is exact and losslessly invertible.
//!
//! ### KeyDeduplicator
//! A bounded-memory, best-effort detector for records whose key was already
//! seen on a partition. Fixed slot count per partition, overwrite on
//! collision: false negatives are possible after eviction, false positives
//! are not.
//!
//! ### RecordParser
//! The trait partition extraction strategies implement: given a record,
//! produce the ordered directory segments its file belongs under.
//!
//! Neither component depends on the other; both are driven by the
//! consumption loop above this crate.
//!
//! ## Usage
//!
//! ```ignore
//! use logsink_storage::{KeyDeduplicator, LogFilePath, SinkConfig};
//!
//! let config = SinkConfig::default();
//! let mut dedup = KeyDeduplicator::new(config.dedup_limit);
//!
//! let parsed = parser.parse(&record)?;
//! if !dedup.is_present(&record.topic_partition(), record.key.as_ref()) {
//!     let path = LogFilePath::from_parsed(&config.prefix, &parsed, config.generation, "");
//!     writer.write(path.path(), &record)?;
//! }
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod parser;
pub mod path;

pub use config::SinkConfig;
pub use dedup::KeyDeduplicator;
pub use error::{Error, Result};
pub use parser::RecordParser;
pub use path::LogFilePath;
