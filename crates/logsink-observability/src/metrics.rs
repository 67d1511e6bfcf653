use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::Once;

static INIT: Once = Once::new();

lazy_static! {
    /// Global Prometheus metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // Deduplication Metrics
    // ============================================================================

    /// Key lookups performed against the per-partition dedup tables
    pub static ref DEDUP_CHECKS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("logsink_dedup_checks_total", "Total dedup key lookups"),
        &["topic", "partition"]
    ).expect("metric can be created");

    /// Records suppressed because their key was already seen
    pub static ref DEDUP_DUPLICATES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("logsink_dedup_duplicates_total", "Total duplicate records observed"),
        &["topic", "partition"]
    ).expect("metric can be created");

    // ============================================================================
    // Storage Metrics
    // ============================================================================

    /// Log files (and their crc sidecars) deleted from object storage
    pub static ref FILES_DELETED_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("logsink_files_deleted_total", "Total log files deleted"),
        &["topic"]
    ).expect("metric can be created");
}

/// Initialize metrics registry
/// Can be called multiple times safely (idempotent)
pub fn init() {
    INIT.call_once(|| {
        REGISTRY
            .register(Box::new(DEDUP_CHECKS_TOTAL.clone()))
            .expect("dedup_checks_total can be registered");
        REGISTRY
            .register(Box::new(DEDUP_DUPLICATES_TOTAL.clone()))
            .expect("dedup_duplicates_total can be registered");
        REGISTRY
            .register(Box::new(FILES_DELETED_TOTAL.clone()))
            .expect("files_deleted_total can be registered");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        init();

        let before = DEDUP_CHECKS_TOTAL
            .with_label_values(&["test-topic", "0"])
            .get();
        DEDUP_CHECKS_TOTAL
            .with_label_values(&["test-topic", "0"])
            .inc();
        assert_eq!(
            DEDUP_CHECKS_TOTAL
                .with_label_values(&["test-topic", "0"])
                .get(),
            before + 1
        );
    }

    #[test]
    fn test_duplicate_counter_labels() {
        init();

        DEDUP_DUPLICATES_TOTAL
            .with_label_values(&["test-topic", "1"])
            .inc();
        assert!(
            DEDUP_DUPLICATES_TOTAL
                .with_label_values(&["test-topic", "1"])
                .get()
                >= 1
        );
    }
}
