//! Level range filter

use super::MatchOutcome;
use crate::core::{Filter, FilterResult, LogLevel, Marker, Throwable};

/// Matches calls whose level lies within `[min, max]`
#[derive(Debug, Clone, Copy)]
pub struct LevelFilter {
    min: LogLevel,
    max: LogLevel,
    outcome: MatchOutcome,
}

impl LevelFilter {
    /// Match `level` and everything more severe
    pub fn at_least(level: LogLevel) -> Self {
        Self::between(level, LogLevel::Critical)
    }

    /// Match levels in `[min, max]`; the bounds are swapped if reversed
    pub fn between(min: LogLevel, max: LogLevel) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
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
}

impl Filter for LevelFilter {
    fn evaluate(
        &self,
        _logger_name: &str,
        level: LogLevel,
        _marker: Option<&Marker>,
        _throwable: Option<&Throwable>,
    ) -> FilterResult {
        self.outcome.result((self.min..=self.max).contains(&level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let filter = LevelFilter::at_least(LogLevel::Warn);
        assert_eq!(filter.evaluate("app", LogLevel::Error, None, None), FilterResult::Neutral);
        assert_eq!(filter.evaluate("app", LogLevel::Info, None, None), FilterResult::Deny);
    }

    #[test]
    fn test_between_with_custom_outcome() {
        let filter = LevelFilter::between(LogLevel::Error, LogLevel::Debug)
            .on_match(FilterResult::Accept)
            .on_mismatch(FilterResult::Neutral);
        assert_eq!(filter.evaluate("app", LogLevel::Debug, None, None), FilterResult::Accept);
        assert_eq!(filter.evaluate("app", LogLevel::Error, None, None), FilterResult::Accept);
        assert_eq!(filter.evaluate("app", LogLevel::Trace, None, None), FilterResult::Neutral);
        assert_eq!(filter.evaluate("app", LogLevel::Critical, None, None), FilterResult::Neutral);
    }
}
