//! Random sampling for high-volume loggers
//!
//! Drops a configurable share of calls while letting chosen levels through
//! unconditionally. Rates can be set per logger subtree, so a chatty
//! component can be thinned without touching the rest.
//!
//! # Example
//!
//! ```
//! use rust_log_facade::filters::{SamplingConfig, SamplingFilter};
//! use rust_log_facade::LogLevel;
//!
//! let filter = SamplingFilter::new(
//!     SamplingConfig::new(0.1)
//!         .with_always_sample(vec![LogLevel::Warn, LogLevel::Error, LogLevel::Critical])
//!         .with_logger_rate("net.packets", 0.01),
//! );
//! ```

use super::name::name_in_scope;
use crate::core::{Filter, FilterResult, LogLevel, Marker, Throwable};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Configuration for [`SamplingFilter`]
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Sample rate between 0.0 and 1.0
    ///
    /// - 1.0 = keep everything
    /// - 0.1 = keep 10% of calls
    /// - 0.0 = drop everything except `always_sample` levels
    pub rate: f64,

    /// Levels that are never dropped
    pub always_sample: Vec<LogLevel>,

    /// Per-logger rates, keyed by a point in the name hierarchy. `net`
    /// covers `net.packets` but not `network`. The longest matching prefix
    /// wins.
    pub logger_rates: Vec<(String, f64)>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            always_sample: vec![LogLevel::Error, LogLevel::Critical],
            logger_rates: Vec::new(),
        }
    }
}

impl SamplingConfig {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_always_sample(mut self, levels: Vec<LogLevel>) -> Self {
        self.always_sample = levels;
        self
    }

    #[must_use]
    pub fn with_logger_rate(mut self, logger_prefix: impl Into<String>, rate: f64) -> Self {
        self.logger_rates
            .push((logger_prefix.into(), rate.clamp(0.0, 1.0)));
        self
    }

    fn rate_for(&self, logger_name: &str) -> f64 {
        self.logger_rates
            .iter()
            .filter(|(prefix, _)| name_in_scope(prefix, logger_name))
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.rate, |(_, rate)| *rate)
    }
}

/// Counters for sampling decisions
#[derive(Debug)]
pub struct SamplerMetrics {
    sampled_count: AtomicU64,
    dropped_count: AtomicU64,
}

impl SamplerMetrics {
    pub const fn new() -> Self {
        Self {
            sampled_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn sampled_count(&self) -> u64 {
        self.sampled_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Share of calls kept so far; 1.0 before any call
    pub fn effective_sample_rate(&self) -> f64 {
        let sampled = self.sampled_count() as f64;
        let total = sampled + self.dropped_count() as f64;
        if total == 0.0 {
            1.0
        } else {
            sampled / total
        }
    }

    pub fn reset(&self) {
        self.sampled_count.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
    }

    fn record(&self, sampled: bool) {
        if sampled {
            self.sampled_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dropped_count.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for SamplerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports `Neutral` for sampled calls and `Deny` for dropped ones
#[derive(Debug)]
pub struct SamplingFilter {
    config: SamplingConfig,
    metrics: SamplerMetrics,
}

impl SamplingFilter {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            metrics: SamplerMetrics::new(),
        }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SamplerMetrics {
        &self.metrics
    }

    fn should_sample(&self, logger_name: &str, level: LogLevel) -> bool {
        if self.config.always_sample.contains(&level) {
            return true;
        }
        let rate = self.config.rate_for(logger_name);
        if rate >= 1.0 {
            true
        } else if rate <= 0.0 {
            false
        } else {
            rand::thread_rng().gen::<f64>() < rate
        }
    }
}

impl Filter for SamplingFilter {
    fn evaluate(
        &self,
        logger_name: &str,
        level: LogLevel,
        _marker: Option<&Marker>,
        _throwable: Option<&Throwable>,
    ) -> FilterResult {
        let sampled = self.should_sample(logger_name, level);
        self.metrics.record(sampled);
        if sampled {
            FilterResult::Neutral
        } else {
            FilterResult::Deny
        }
    }
}
