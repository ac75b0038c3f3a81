//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::filters::{AlwaysAcceptFilter, AlwaysDenyFilter, AlwaysNeutralFilter};
use rust_log_facade::{
    AndroidLevelMapper, Filter, FilterChain, FilterResult, Handler, HandlerBuilder, LevelMapper,
    LogLevel,
};
use rust_log_facade::sinks::{tag_from_name, MemorySink};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

fn any_result() -> impl Strategy<Value = FilterResult> {
    prop_oneof![
        Just(FilterResult::Accept),
        Just(FilterResult::Deny),
        Just(FilterResult::Neutral),
    ]
}

fn constant_filter(result: FilterResult) -> Arc<dyn Filter> {
    match result {
        FilterResult::Accept => Arc::new(AlwaysAcceptFilter),
        FilterResult::Deny => Arc::new(AlwaysDenyFilter),
        FilterResult::Neutral => Arc::new(AlwaysNeutralFilter),
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering follows the ordinal
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.ordinal() <= b.ordinal());
        prop_assert_eq!(a < b, a.ordinal() < b.ordinal());
    }

    /// Test that the native mapping is a bijection on all six levels
    #[test]
    fn test_native_mapping_roundtrip(level in any_level()) {
        let mapper = AndroidLevelMapper;
        let native = mapper.to_native(level);
        prop_assert_eq!(mapper.from_native(native), level);
        prop_assert_eq!(mapper.from_raw(native.as_raw()).unwrap(), level);
    }

    /// Test that the native mapping preserves severity order
    #[test]
    fn test_native_mapping_is_monotonic(a in any_level(), b in any_level()) {
        let mapper = AndroidLevelMapper;
        prop_assert_eq!(a < b, mapper.to_native(a) < mapper.to_native(b));
    }

    /// Test that raw values outside the platform range are rejected
    #[test]
    fn test_unknown_raw_values_rejected(raw in prop_oneof![i32::MIN..2i32, 8i32..i32::MAX]) {
        prop_assert!(AndroidLevelMapper.from_raw(raw).is_err());
    }
}

// ============================================================================
// Filter Chain Tests
// ============================================================================

proptest! {
    /// Test that a chain reports the first decisive result, or Neutral
    #[test]
    fn test_first_decisive_result_wins(results in prop::collection::vec(any_result(), 0..8)) {
        let chain: FilterChain = results.iter().copied().map(constant_filter).collect();
        let expected = results
            .iter()
            .copied()
            .find(|r| *r != FilterResult::Neutral)
            .unwrap_or(FilterResult::Neutral);
        prop_assert_eq!(chain.evaluate("app", LogLevel::Info, None, None), expected);
    }

    /// Test that a handler never accepts below its threshold, whatever the filters say
    #[test]
    fn test_threshold_always_gates(
        threshold in any_level(),
        level in any_level(),
        results in prop::collection::vec(any_result(), 0..5),
    ) {
        let mut builder = HandlerBuilder::new().min_level(threshold);
        for result in &results {
            builder = builder.shared_filter(constant_filter(*result));
        }
        let handler = builder.build(MemorySink::new());

        let first_decisive = results.iter().copied().find(|r| *r != FilterResult::Neutral);
        let expected = level >= threshold && first_decisive != Some(FilterResult::Deny);
        prop_assert_eq!(handler.is_loggable("app", level, None, None), expected);
    }

    /// Test that derived tags never exceed the platform limit
    #[test]
    fn test_tag_length_bounded(name in "[a-zA-Z0-9_.:$]{0,64}") {
        let tag = tag_from_name(&name);
        prop_assert!(tag.chars().count() <= 23);
        prop_assert!(!tag.contains('.'));
    }
}
