//! Filters with a fixed answer

use crate::core::{Filter, FilterResult, LogLevel, Marker, Throwable};

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAcceptFilter;

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDenyFilter;

/// Defers every decision to the next filter
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysNeutralFilter;

impl Filter for AlwaysAcceptFilter {
    fn evaluate(
        &self,
        _: &str,
        _: LogLevel,
        _: Option<&Marker>,
        _: Option<&Throwable>,
    ) -> FilterResult {
        FilterResult::Accept
    }
}

impl Filter for AlwaysDenyFilter {
    fn evaluate(
        &self,
        _: &str,
        _: LogLevel,
        _: Option<&Marker>,
        _: Option<&Throwable>,
    ) -> FilterResult {
        FilterResult::Deny
    }
}

impl Filter for AlwaysNeutralFilter {
    fn evaluate(
        &self,
        _: &str,
        _: LogLevel,
        _: Option<&Marker>,
        _: Option<&Throwable>,
    ) -> FilterResult {
        FilterResult::Neutral
    }
}
