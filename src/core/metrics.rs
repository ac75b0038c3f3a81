//! Handler metrics for observability
//!
//! Counters for how many records a handler published and how many its sink
//! failed to write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-handler counters
///
/// # Example
///
/// ```
/// use rust_log_facade::HandlerMetrics;
///
/// let metrics = HandlerMetrics::new();
/// metrics.record_published();
/// metrics.record_failed();
///
/// assert_eq!(metrics.published_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug)]
pub struct HandlerMetrics {
    /// Records written to the sink without error
    published_count: AtomicU64,

    /// Records the sink failed to write (error or panic)
    failed_count: AtomicU64,
}

impl HandlerMetrics {
    pub const fn new() -> Self {
        Self {
            published_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn published_count(&self) -> u64 {
        self.published_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_published(&self) -> u64 {
        self.published_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Sink failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been published yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.published_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.published_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
    }
}

impl Default for HandlerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HandlerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            published_count: AtomicU64::new(self.published_count()),
            failed_count: AtomicU64::new(self.failed_count()),
        }
    }
}
