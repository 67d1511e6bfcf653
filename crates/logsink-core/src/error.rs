//! Core Error Types
//!
//! This module defines errors shared by the core value types.
//!
//! ## Error Categories
//!
//! ### Construction Errors
//! - `EmptyPathComponents`: a `Components` value was built with no path segments
//! - `EmptyFilenameComponents`: a `Components` value was built with no filename segments
//!
//! Both are rejected at construction time so that the path codec never has to
//! deal with degenerate component lists.
//!
//! ## Usage
//! All fallible core operations return `Result<T>` which is aliased to
//! `Result<T, Error>`. This allows clean error propagation with `?`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Path components cannot be empty")]
    EmptyPathComponents,

    #[error("Filename components cannot be empty")]
    EmptyFilenameComponents,
}
