//! Logging macros for ergonomic log message formatting.
//!
//! The format arguments are only evaluated when at least one handler
//! accepts the call, so expensive `Debug` output costs nothing when it is
//! filtered out.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::info;
//!
//! let logger = Logger::new("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With a marker
//! let audit = Marker::new("AUDIT");
//! info!(logger, marker: &audit, "User {} logged in", 42);
//!
//! // With an error, optionally after a marker
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! info!(logger, throwable: &err, "Write failed");
//! info!(logger, marker: &audit, throwable: &err, "Audit write failed");
//! ```
//!
//! The call site's file, line and module are attached to the record when
//! the logger has `include_location` enabled.

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    (@call $logger:expr, $level:expr, $marker:expr, $err:expr, $($arg:tt)+) => {
        $logger.log_at(
            $crate::CallerLocation::new(file!(), line!(), Some(module_path!())),
            $level,
            || format!($($arg)+),
            $marker,
            $err,
        )
    };
    ($logger:expr, $level:expr, marker: $marker:expr, throwable: $err:expr, $($arg:tt)+) => {
        $crate::log!(
            @call $logger,
            $level,
            Some($marker),
            Some($err as &$crate::Throwable),
            $($arg)+
        )
    };
    ($logger:expr, $level:expr, marker: $marker:expr, $($arg:tt)+) => {
        $crate::log!(@call $logger, $level, Some($marker), None, $($arg)+)
    };
    ($logger:expr, $level:expr, throwable: $err:expr, $($arg:tt)+) => {
        $crate::log!(@call $logger, $level, None, Some($err as &$crate::Throwable), $($arg)+)
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!(@call $logger, $level, None, None, $($arg)+)
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_facade::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_facade::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_facade::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
