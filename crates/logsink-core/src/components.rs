//! Path and Filename Components
//!
//! This module defines `Components` - the immutable identity value extracted
//! from a record that determines where its log file lives on storage.
//!
//! ## Structure
//! A `Components` value is a pair of ordered string sequences:
//! - **path**: directory segments below the topic directory. These are
//!   extracted from record content, e.g. a date partition such as
//!   `dt=2024-01-01`.
//! - **filename**: segments prefixed to the file basename. In normal
//!   operation this is a single segment: the consumer generation rendered in
//!   decimal.
//!
//! ## Invariants
//! - Both sequences are non-empty; construction fails otherwise.
//! - Values are immutable after construction.
//! - Equality and hashing are structural: element-wise and order-sensitive
//!   across both sequences.
//!
//! ## Lifecycle
//! Created once per record by a `RecordParser`, consumed by the path codec to
//! derive the file path, then discarded. Never mutated.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a log file below its topic: directory segments plus basename
/// prefix segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Components {
    path: Vec<String>,
    filename: Vec<String>,
}

impl Components {
    /// Create components from explicit path and filename segment lists.
    ///
    /// Fails if either list is empty.
    pub fn new(path: Vec<String>, filename: Vec<String>) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::EmptyPathComponents);
        }
        if filename.is_empty() {
            return Err(Error::EmptyFilenameComponents);
        }
        Ok(Self { path, filename })
    }

    /// Create components for a freshly parsed record: the extracted partition
    /// segments become the path, and the generation becomes the sole filename
    /// segment.
    pub fn for_record(path: Vec<String>, generation: u32) -> Result<Self> {
        Self::new(path, vec![generation.to_string()])
    }

    /// Directory segments below the topic, in order
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Basename prefix segments, in order
    pub fn filename(&self) -> &[String] {
        &self.filename
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Components{{{:?}, {:?}}}",
            self.path, self.filename
        )
    }
}
