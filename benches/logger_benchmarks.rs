//! Criterion benchmarks for rust_log_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_facade::filters::{
    AlwaysNeutralFilter, LevelFilter, MarkerFilter, RateLimitFilter, SamplingConfig,
    SamplingFilter,
};
use rust_log_facade::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Sink that accepts and drops every record
struct DiscardSink;

impl LogSink for DiscardSink {
    fn write(&self, record: &LogRecord) -> Result<()> {
        black_box(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}

fn logger_with(handler: impl Handler + 'static) -> Logger {
    Logger::builder("bench.logger").handler(handler).build()
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let empty = Logger::new("bench.empty");
    group.bench_function("no_handlers", |b| {
        b.iter(|| empty.info(black_box("Test message")));
    });

    let single = logger_with(HandlerBuilder::new().build(DiscardSink));
    group.bench_function("single_handler", |b| {
        b.iter(|| single.info(black_box("Test message")));
    });

    let mut builder = Logger::builder("bench.many");
    for _ in 0..8 {
        builder = builder.handler(HandlerBuilder::new().build(DiscardSink));
    }
    let many = builder.build();
    group.bench_function("eight_handlers", |b| {
        b.iter(|| many.info(black_box("Test message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| {
            rust_log_facade::info!(
                single,
                "User {} performed {}",
                black_box(42),
                black_box("login")
            )
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = logger_with(
        HandlerBuilder::new()
            .min_level(LogLevel::Warn)
            .build(DiscardSink),
    );

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    group.bench_function("below_threshold_lazy", |b| {
        b.iter(|| {
            logger.log(
                LogLevel::Debug,
                || format!("expensive {:?}", black_box(vec![1, 2, 3])),
                None,
                None,
            )
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.warn(black_box("This should pass")));
    });

    group.finish();
}

fn bench_filter_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_chain");
    group.throughput(Throughput::Elements(1));

    let audit = Marker::new("AUDIT");
    let logger = logger_with(
        HandlerBuilder::new()
            .filter(AlwaysNeutralFilter)
            .filter(LevelFilter::at_least(LogLevel::Info))
            .filter(MarkerFilter::new(audit.clone()).on_match(FilterResult::Accept))
            .build(DiscardSink),
    );

    group.bench_function("marker_accepted", |b| {
        b.iter(|| logger.log_marked(LogLevel::Info, &audit, black_box("audited")));
    });

    group.bench_function("marker_denied", |b| {
        b.iter(|| logger.info(black_box("unmarked")));
    });

    let chain_len = 16;
    let mut builder = HandlerBuilder::new();
    for _ in 0..chain_len {
        builder = builder.filter(AlwaysNeutralFilter);
    }
    let neutral = logger_with(builder.build(DiscardSink));
    group.bench_function("sixteen_neutral_filters", |b| {
        b.iter(|| neutral.info(black_box("passes through")));
    });

    group.finish();
}

fn bench_stateful_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateful_filters");
    group.throughput(Throughput::Elements(1));

    let limited = logger_with(
        HandlerBuilder::new()
            .filter(RateLimitFilter::new(1_000, Duration::from_millis(100)).unwrap())
            .build(DiscardSink),
    );
    group.bench_function("rate_limit", |b| {
        b.iter(|| limited.info(black_box("limited")));
    });

    for rate in [0.1, 0.5] {
        let sampled = logger_with(
            HandlerBuilder::new()
                .filter(SamplingFilter::new(SamplingConfig::new(rate)))
                .build(DiscardSink),
        );
        group.bench_function(format!("sampling_{}", rate), |b| {
            b.iter(|| sampled.info(black_box("sampled")));
        });
    }

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    let threads = 4;
    let per_thread = 1_000;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    let logger = Arc::new(logger_with(HandlerBuilder::new().build(DiscardSink)));

    group.bench_function("four_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    thread::spawn(move || {
                        for i in 0..per_thread {
                            logger.info(format!("message {}", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_dispatch,
    bench_level_filtering,
    bench_filter_chain,
    bench_stateful_filters,
    bench_concurrent_logging
);

criterion_main!(benches);
