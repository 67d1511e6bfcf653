//! LogSink Observability
//!
//! Provides the process-wide Prometheus registry and counters for LogSink.
//!
//! # Usage
//!
//! ```no_run
//! use logsink_observability::metrics;
//!
//! // Register metrics once at startup
//! metrics::init();
//! ```

pub mod metrics;

// Re-export commonly used items
pub use metrics::{init as init_metrics, REGISTRY};
