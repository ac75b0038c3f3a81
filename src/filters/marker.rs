//! Marker-based routing

use super::MatchOutcome;
use crate::core::{Filter, FilterResult, LogLevel, Marker, Throwable};

/// Matches calls whose marker is, or is referenced by, the configured marker.
///
/// Calls without a marker never match.
#[derive(Debug, Clone)]
pub struct MarkerFilter {
    marker: Marker,
    outcome: MatchOutcome,
}

impl MarkerFilter {
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
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

    pub fn marker(&self) -> &Marker {
        &self.marker
    }
}

impl Filter for MarkerFilter {
    fn evaluate(
        &self,
        _logger_name: &str,
        _level: LogLevel,
        marker: Option<&Marker>,
        _throwable: Option<&Throwable>,
    ) -> FilterResult {
        let matched = marker.is_some_and(|m| self.marker.is_or_contains(m));
        self.outcome.result(matched)
    }
}
