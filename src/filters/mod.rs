//! Built-in filter implementations
//!
//! Configurable filters reduce their test to a match / mismatch and report
//! the corresponding [`FilterResult`] from a [`MatchOutcome`]. The default
//! outcome lets matching calls continue down the chain (`Neutral`) and stops
//! everything else (`Deny`).

pub mod constant;
pub mod level;
pub mod marker;
pub mod name;
pub mod rate_limit;
pub mod sampling;

pub use constant::{AlwaysAcceptFilter, AlwaysDenyFilter, AlwaysNeutralFilter};
pub use level::LevelFilter;
pub use marker::MarkerFilter;
pub use name::LoggerNameFilter;
pub use rate_limit::RateLimitFilter;
pub use sampling::{SamplerMetrics, SamplingConfig, SamplingFilter};

// Re-export traits for convenience
pub use crate::core::{Filter, FilterChain, FilterResult};

/// Results reported when a filter's test matches or differs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub on_match: FilterResult,
    pub on_mismatch: FilterResult,
}

impl MatchOutcome {
    pub const fn new(on_match: FilterResult, on_mismatch: FilterResult) -> Self {
        Self {
            on_match,
            on_mismatch,
        }
    }

    #[inline]
    pub fn result(&self, matched: bool) -> FilterResult {
        if matched {
            self.on_match
        } else {
            self.on_mismatch
        }
    }
}

impl Default for MatchOutcome {
    fn default() -> Self {
        Self::new(FilterResult::Neutral, FilterResult::Deny)
    }
}
