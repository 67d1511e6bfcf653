//! Sink Configuration
//!
//! This module defines configuration for the file materialization path.
//!
//! ## SinkConfig
//!
//! - **prefix**: top-level storage directory for log files (local path or
//!   object store prefix)
//! - **generation**: consumer version stamped into file basenames. Bumped
//!   across incompatible releases so their files can coexist on the same
//!   storage during a rolling upgrade (default: 0)
//! - **dedup_limit**: slots per partition in the key deduplicator
//!   (default: 65536). Larger values remember more keys before eviction at
//!   the cost of memory per partition.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Top-level storage prefix for log files
    pub prefix: String,

    /// Consumer generation stamped into file basenames (default: 0)
    #[serde(default)]
    pub generation: u32,

    /// Dedup slots per partition (default: 65536)
    #[serde(default = "default_dedup_limit")]
    pub dedup_limit: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            prefix: "logsink".to_string(),
            generation: 0,
            dedup_limit: default_dedup_limit(),
        }
    }
}

fn default_dedup_limit() -> usize {
    64 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SinkConfig::default();
        assert_eq!(config.generation, 0);
        assert_eq!(config.dedup_limit, 65536);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: SinkConfig = serde_json::from_str(r#"{"prefix": "/logs"}"#).unwrap();
        assert_eq!(config.prefix, "/logs");
        assert_eq!(config.generation, 0);
        assert_eq!(config.dedup_limit, 65536);
    }

    #[test]
    fn test_deserialize_explicit_values() {
        let config: SinkConfig = serde_json::from_str(
            r#"{"prefix": "s3://bucket/logs", "generation": 2, "dedup_limit": 128}"#,
        )
        .unwrap();
        assert_eq!(config.prefix, "s3://bucket/logs");
        assert_eq!(config.generation, 2);
        assert_eq!(config.dedup_limit, 128);
    }
}
