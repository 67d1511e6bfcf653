//! Storage Error Types
//!
//! This module defines all error types that can occur in the storage layer.
//!
//! ## Error Categories
//!
//! ### Malformed Path Errors
//! Raised when decoding a path that does not follow the log file naming
//! scheme. Each variant names the specific check that failed, because a
//! directory scan wants to log exactly why a foreign path was skipped:
//! - `PrefixMismatch`: path does not start with the expected storage prefix
//! - `TooFewElements`: suffix has fewer than topic + partition + basename
//! - `BasenameTokenCount`: basename does not split into exactly 3 tokens
//! - `InvalidGeneration` / `InvalidPartition` / `InvalidOffset`: a basename
//!   token is not a non-negative number
//!
//! ### Parse Errors
//! - `RecordParse`: a parser failed to extract partition segments from a
//!   record payload
//!
//! ### Construction / Storage Errors
//! - `Core`: invalid components (empty segment lists)
//! - `ObjectStore`: low-level object store operation failed
//!
//! ## Usage
//! All storage operations return `Result<T>` which is aliased to
//! `Result<T, Error>`. Malformed path errors are never retried here: they
//! indicate a foreign or corrupted path and must surface to the caller.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed path: {path:?} does not start with prefix {prefix:?}")]
    PrefixMismatch { prefix: String, path: String },

    #[error("Malformed path: expected at least topic, one partition and a basename in {0:?}")]
    TooFewElements(String),

    #[error("Malformed path: expected 3 basename tokens in {0:?}")]
    BasenameTokenCount(String),

    #[error("Malformed path: invalid generation in {0:?}")]
    InvalidGeneration(String),

    #[error("Malformed path: invalid partition in {0:?}")]
    InvalidPartition(String),

    #[error("Malformed path: invalid offset in {0:?}")]
    InvalidOffset(String),

    #[error("Record parse error: {0}")]
    RecordParse(String),

    #[error("Core error: {0}")]
    Core(#[from] logsink_core::Error),

    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),
}

impl Error {
    /// Convenience for parser implementations reporting a bad payload
    pub fn record_parse(message: impl Into<String>) -> Self {
        Error::RecordParse(message.into())
    }
}
