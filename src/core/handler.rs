//! Handlers: gate log calls and hand accepted records to a sink

use super::{
    filter::{Filter, FilterChain, Throwable},
    filter_result::FilterResult,
    log_level::LogLevel,
    log_record::LogRecord,
    marker::Marker,
    metrics::HandlerMetrics,
    sink::LogSink,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sink adapter attached to a [`Logger`](super::Logger).
///
/// `is_loggable` must be a pure decision. `publish` is only called after
/// `is_loggable` returned true for the same call and should not propagate a
/// failure back to the caller; the logger isolates panics from either call.
pub trait Handler: Send + Sync {
    fn is_loggable(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> bool;

    fn publish(&self, record: &LogRecord);

    fn flush(&self) {}

    fn name(&self) -> &str;
}

/// Threshold and ordered filters shared by every configured handler
#[derive(Debug, Clone, Default)]
pub struct HandlerConfig {
    min_level: LogLevel,
    filters: FilterChain,
}

impl HandlerConfig {
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    /// Threshold gate first, then the filter chain.
    ///
    /// A call below `min_level` is never loggable. Above it, the first
    /// decisive filter decides; an all-neutral (or empty) chain falls back to
    /// the threshold check, which has already passed.
    pub fn is_loggable(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> bool {
        if level < self.min_level {
            return false;
        }
        if self.filters.is_empty() {
            return true;
        }
        match self.filters.evaluate(logger_name, level, marker, throwable) {
            FilterResult::Accept | FilterResult::Neutral => true,
            FilterResult::Deny => false,
        }
    }

    /// Let stateful filters spend their budget on `record`
    pub fn claim(&self, record: &LogRecord) -> bool {
        self.filters.claim(record)
    }
}

/// Plain handler configuration, suitable for loading from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerSettings {
    pub name: Option<String>,
    pub min_level: LogLevel,
}

/// Builder for constructing handlers with a fluent API
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
/// use rust_log_facade::filters::MarkerFilter;
/// use rust_log_facade::sinks::MemorySink;
///
/// let handler = HandlerBuilder::new()
///     .min_level(LogLevel::Info)
///     .filter(MarkerFilter::new(Marker::new("AUDIT")))
///     .build(MemorySink::new());
///
/// assert!(!handler.is_loggable("app", LogLevel::Debug, None, None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerBuilder {
    name: Option<String>,
    min_level: LogLevel,
    filters: FilterChain,
}

impl HandlerBuilder {
    /// Create a new builder: threshold `Trace`, no filters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &HandlerSettings) -> Self {
        Self {
            name: settings.name.clone(),
            min_level: settings.min_level,
            filters: FilterChain::new(),
        }
    }

    /// Name reported by the handler; defaults to the sink's name
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Append a filter; filters run in the order they were added
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn build_config(self) -> HandlerConfig {
        HandlerConfig {
            min_level: self.min_level,
            filters: self.filters,
        }
    }

    pub fn build<S: LogSink>(self, sink: S) -> SinkHandler<S> {
        let name = self.name.clone().unwrap_or_else(|| sink.name().to_string());
        SinkHandler {
            name,
            config: self.build_config(),
            sink,
            metrics: HandlerMetrics::new(),
        }
    }
}

/// Handler that evaluates a [`HandlerConfig`] and writes to a [`LogSink`]
pub struct SinkHandler<S> {
    name: String,
    config: HandlerConfig,
    sink: S,
    metrics: HandlerMetrics,
}

impl<S: LogSink> SinkHandler<S> {
    pub fn builder() -> HandlerBuilder {
        HandlerBuilder::new()
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn metrics(&self) -> &HandlerMetrics {
        &self.metrics
    }
}

pub(crate) fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl<S: LogSink> Handler for SinkHandler<S> {
    fn is_loggable(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> bool {
        self.config.is_loggable(logger_name, level, marker, throwable)
    }

    fn publish(&self, record: &LogRecord) {
        if !self.config.claim(record) {
            return;
        }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.sink.write(record)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_published();
            }
            Ok(Err(e)) => {
                let failed = self.metrics.record_failed();
                // First failure and every thousandth after that
                if failed % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Handler '{}' failed to write ({} failures): {}",
                        self.name,
                        failed + 1,
                        e
                    );
                }
            }
            Err(panic_info) => {
                self.metrics.record_failed();
                eprintln!(
                    "[LOGGER CRITICAL] Handler '{}' sink panicked: {}. \
                     Other handlers continue to function.",
                    self.name,
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            eprintln!("[LOGGER ERROR] Handler '{}' flush failed: {}", self.name, e);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Handler that never accepts anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl Handler for NullHandler {
    fn is_loggable(
        &self,
        _: &str,
        _: LogLevel,
        _: Option<&Marker>,
        _: Option<&Throwable>,
    ) -> bool {
        false
    }

    fn publish(&self, _record: &LogRecord) {}

    fn name(&self) -> &str {
        "null"
    }
}
