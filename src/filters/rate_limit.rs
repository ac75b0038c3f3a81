//! Fixed-window rate limiting

use crate::core::{
    Filter, FilterResult, LogLevel, LogRecord, LoggerError, Marker, Result, Throwable,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// Handlers sharing a limiter claim the same record back to back
const RECENT_CLAIMS: usize = 64;

#[derive(Debug)]
struct Window {
    start: Instant,
    count: u32,
    recent: VecDeque<u64>,
}

impl Window {
    fn count_at(&self, now: Instant, window: Duration) -> u32 {
        if now.saturating_duration_since(self.start) >= window {
            0
        } else {
            self.count
        }
    }
}

/// Lets at most `max_per_window` records through per window, then reports
/// `Deny` until the window rolls over.
///
/// `evaluate` only looks at the remaining budget; a record spends it when a
/// handler claims it for publishing, and a record shared by several handlers
/// is charged once. Calls within the budget report `Neutral` so later filters
/// still decide.
///
/// # Example
///
/// ```
/// use rust_log_facade::filters::RateLimitFilter;
/// use rust_log_facade::LogLevel;
/// use std::time::Duration;
///
/// let filter = RateLimitFilter::new(100, Duration::from_secs(1))
///     .unwrap()
///     .with_bypass(LogLevel::Error);
/// ```
#[derive(Debug)]
pub struct RateLimitFilter {
    max_per_window: u32,
    window: Duration,
    bypass: Option<LogLevel>,
    state: Mutex<Window>,
    suppressed: AtomicU64,
}

impl RateLimitFilter {
    /// Fails if either the budget or the window is zero
    pub fn new(max_per_window: u32, window: Duration) -> Result<Self> {
        if max_per_window == 0 {
            return Err(LoggerError::config(
                "RateLimitFilter",
                "max_per_window must be greater than zero",
            ));
        }
        if window.is_zero() {
            return Err(LoggerError::config(
                "RateLimitFilter",
                "window must be non-zero",
            ));
        }
        Ok(Self {
            max_per_window,
            window,
            bypass: None,
            state: Mutex::new(Window {
                start: Instant::now(),
                count: 0,
                recent: VecDeque::with_capacity(RECENT_CLAIMS),
            }),
            suppressed: AtomicU64::new(0),
        })
    }

    /// Calls at `level` or above are never limited and do not use the budget
    #[must_use = "builder methods return a new value"]
    pub fn with_bypass(mut self, level: LogLevel) -> Self {
        self.bypass = Some(level);
        self
    }

    /// Denials reported since creation
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    fn bypasses(&self, level: LogLevel) -> bool {
        self.bypass.is_some_and(|bypass| level >= bypass)
    }

    fn evaluate_at(&self, level: LogLevel, now: Instant) -> FilterResult {
        if self.bypasses(level) {
            return FilterResult::Neutral;
        }
        if self.state.lock().count_at(now, self.window) < self.max_per_window {
            FilterResult::Neutral
        } else {
            self.suppressed.fetch_add(1, Ordering::Relaxed);
            FilterResult::Deny
        }
    }

    fn claim_at(&self, level: LogLevel, sequence: u64, now: Instant) -> bool {
        if self.bypasses(level) {
            return true;
        }

        let mut state = self.state.lock();
        if state.recent.contains(&sequence) {
            return true;
        }
        if now.saturating_duration_since(state.start) >= self.window {
            state.start = now;
            state.count = 0;
        }
        if state.count >= self.max_per_window {
            drop(state);
            self.suppressed.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        state.count += 1;
        if state.recent.len() == RECENT_CLAIMS {
            state.recent.pop_front();
        }
        state.recent.push_back(sequence);
        true
    }
}

impl Filter for RateLimitFilter {
    fn evaluate(
        &self,
        _logger_name: &str,
        level: LogLevel,
        _marker: Option<&Marker>,
        _throwable: Option<&Throwable>,
    ) -> FilterResult {
        self.evaluate_at(level, Instant::now())
    }

    fn claim(&self, record: &LogRecord) -> bool {
        self.claim_at(record.level(), record.sequence(), Instant::now())
    }
}
