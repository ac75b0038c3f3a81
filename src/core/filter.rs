//! Filter trait and ordered filter chains

use super::filter_result::FilterResult;
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::marker::Marker;
use std::fmt;
use std::sync::Arc;

/// Error value attached to a log call
pub type Throwable = dyn std::error::Error + 'static;

/// Decides whether a candidate log call should be emitted.
///
/// `evaluate` answers the question without consuming anything, so it may be
/// asked any number of times for one call (for example by
/// `Logger::is_loggable` and again by `Logger::log`). Filters that spend a
/// budget do so in `claim`, which runs once a handler is about to publish.
/// Filters must be safe to call from many threads at once and must never log
/// through the facade.
pub trait Filter: Send + Sync {
    fn evaluate(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> FilterResult;

    /// Commit to publishing `record`. Returning false drops it.
    ///
    /// Handlers sharing a filter each claim the same record, which carries
    /// one [`LogRecord::sequence`] per call.
    fn claim(&self, _record: &LogRecord) -> bool {
        true
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn evaluate(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> FilterResult {
        (**self).evaluate(logger_name, level, marker, throwable)
    }

    fn claim(&self, record: &LogRecord) -> bool {
        (**self).claim(record)
    }
}

/// Adapts a closure into a [`Filter`]
pub struct FnFilter<F> {
    func: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&str, LogLevel, Option<&Marker>, Option<&Throwable>) -> FilterResult + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&str, LogLevel, Option<&Marker>, Option<&Throwable>) -> FilterResult + Send + Sync,
{
    fn evaluate(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> FilterResult {
        (self.func)(logger_name, level, marker, throwable)
    }
}

/// Ordered sequence of filters; the first decisive result wins.
///
/// Attachment order is preserved. A chain is itself a [`Filter`], so chains
/// can be nested.
#[derive(Clone, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Arc<dyn Filter>) {
        self.filters.push(filter);
    }

    #[must_use]
    pub fn with<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Filter>> {
        self.filters.iter()
    }
}

impl Filter for FilterChain {
    fn evaluate(
        &self,
        logger_name: &str,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> FilterResult {
        for filter in &self.filters {
            let result = filter.evaluate(logger_name, level, marker, throwable);
            if result.is_decisive() {
                return result;
            }
        }
        FilterResult::Neutral
    }

    fn claim(&self, record: &LogRecord) -> bool {
        self.filters.iter().all(|filter| filter.claim(record))
    }
}

impl FromIterator<Arc<dyn Filter>> for FilterChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Filter>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}
