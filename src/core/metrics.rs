//! Logger metrics for observability
//!
//! Counters for records written, records filtered out before reaching a sink,
//! and sink write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use prefix_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.total_written(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records handed to a sink successfully
    total_written: AtomicU64,

    /// Records below the threshold or sent to a disabled sink
    filtered_count: AtomicU64,

    /// Records the sink failed to write
    failed_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_written: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.total_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.filtered_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the previous failure count.
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of attempted writes that failed.
    pub fn failure_rate(&self) -> f64 {
        let written = self.total_written();
        let failed = self.failed_count();
        let total = written + failed;
        if total == 0 {
            0.0
        } else {
            (failed as f64 / total as f64) * 100.0
        }
    }
}
