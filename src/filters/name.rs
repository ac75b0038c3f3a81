//! Logger name scoping

use super::MatchOutcome;
use crate::core::{Filter, FilterResult, LogLevel, Marker, Throwable};

/// Matches loggers at or below a point in the name hierarchy.
///
/// Names are hierarchical with `.` or `::` separators: a filter for
/// `svc` matches `svc`, `svc.auth` and `svc::db`, but not `svcx`.
#[derive(Debug, Clone)]
pub struct LoggerNameFilter {
    prefix: String,
    outcome: MatchOutcome,
}

impl LoggerNameFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            outcome: MatchOutcome::default(),
        }
    }

    #[must_use]
    pub fn on_match(mut self, result: FilterResult) -> Self {
        self.outcome.on_match = result;
        self
    }

    #[must_use]
    pub fn on_mismatch(mut self, result: FilterResult) -> Self {
        self.outcome.on_mismatch = result;
        self
    }

    fn matches(&self, logger_name: &str) -> bool {
        name_in_scope(&self.prefix, logger_name)
    }
}

/// True when `logger_name` is `prefix` itself or one of its descendants.
/// The empty prefix is the root and contains every name.
pub(crate) fn name_in_scope(prefix: &str, logger_name: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match logger_name.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with("::"),
        None => false,
    }
}

impl Filter for LoggerNameFilter {
    fn evaluate(
        &self,
        logger_name: &str,
        _level: LogLevel,
        _marker: Option<&Marker>,
        _throwable: Option<&Throwable>,
    ) -> FilterResult {
        self.outcome.result(self.matches(logger_name))
    }
}
