//! Tri-state filter decisions

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a [`Filter`](super::Filter).
///
/// `Accept` and `Deny` are decisive and stop evaluation of a filter chain.
/// `Neutral` defers to the next filter, or to the handler's threshold once
/// the chain is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterResult {
    Accept,
    Deny,
    Neutral,
}

impl FilterResult {
    #[inline]
    pub fn is_decisive(self) -> bool {
        !matches!(self, FilterResult::Neutral)
    }

    #[inline]
    pub fn accept_if_neutral(self) -> FilterResult {
        match self {
            FilterResult::Neutral => FilterResult::Accept,
            decisive => decisive,
        }
    }

    #[inline]
    pub fn deny_if_neutral(self) -> FilterResult {
        match self {
            FilterResult::Neutral => FilterResult::Deny,
            decisive => decisive,
        }
    }

    /// Combine with a later filter: the first decisive result wins.
    #[inline]
    pub fn or_else<F: FnOnce() -> FilterResult>(self, next: F) -> FilterResult {
        if self.is_decisive() {
            self
        } else {
            next()
        }
    }
}
