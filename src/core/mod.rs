//! Core logger types and traits

pub mod error;
pub mod filter;
pub mod filter_result;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod marker;
pub mod metrics;
pub mod platform_level;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use filter::{Filter, FilterChain, FnFilter, Throwable};
pub use filter_result::FilterResult;
pub use handler::{
    Handler, HandlerBuilder, HandlerConfig, HandlerSettings, NullHandler, SinkHandler,
};
pub use log_level::LogLevel;
pub use log_record::{CallerLocation, LogRecord, ThrowableInfo};
pub use logger::{Logger, LoggerBuilder};
pub use marker::{markers, Marker, MarkerRegistry};
pub use metrics::HandlerMetrics;
pub use platform_level::{AndroidLevelMapper, LevelMapper, NativeLevel};
pub use registry::{logger, loggers, LoggerRegistry, ROOT_LOGGER_NAME};
pub use sink::LogSink;
pub use timestamp::TimestampFormat;
