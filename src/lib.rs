//! # Rust Log Facade
//!
//! A small, pluggable logging facade. Call sites talk to named [`Logger`]s;
//! each logger routes calls to a set of [`Handler`]s, and each handler
//! decides with a level threshold followed by an ordered filter chain
//! whether the call reaches its sink.
//!
//! ## Features
//!
//! - **Lazy messages**: formatting only runs when some handler accepts the call
//! - **Ordered filters**: the first decisive filter wins, neutral ones defer
//! - **Markers**: hierarchical tags that filters can match on
//! - **Android mapping**: levels map onto native logcat priorities
//! - **Fault isolation**: a failing sink never affects the caller or other handlers
//!
//! ## Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::sinks::MemorySink;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder("svc.auth")
//!     .handler(
//!         HandlerBuilder::new()
//!             .min_level(LogLevel::Info)
//!             .filter(LevelFilter::at_least(LogLevel::Warn).on_mismatch(FilterResult::Neutral))
//!             .build(sink.clone()),
//!     )
//!     .build();
//!
//! logger.debug("below threshold");
//! logger.info("login ok");
//! assert_eq!(sink.messages(), vec!["login ok"]);
//! ```

pub mod core;
pub mod filters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        logger, loggers, AndroidLevelMapper, CallerLocation, Filter, FilterChain, FilterResult,
        Handler, HandlerBuilder, HandlerSettings, LevelMapper, LogLevel, LogRecord, LogSink,
        Logger, LoggerBuilder, LoggerError, Marker, NativeLevel, Result,
    };
    pub use crate::filters::{LevelFilter, LoggerNameFilter, MarkerFilter, RateLimitFilter};
}

pub use core::{
    logger, loggers, markers, AndroidLevelMapper, CallerLocation, Filter, FilterChain,
    FilterResult, FnFilter, Handler, HandlerBuilder, HandlerConfig, HandlerMetrics,
    HandlerSettings, LevelMapper, LogLevel, LogRecord, LogSink, Logger, LoggerBuilder,
    LoggerError, LoggerRegistry, Marker, MarkerRegistry, NativeLevel, NullHandler, Result,
    SinkHandler, Throwable, ThrowableInfo, TimestampFormat, ROOT_LOGGER_NAME,
};
