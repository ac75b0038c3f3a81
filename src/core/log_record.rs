//! Log record structure

use super::filter::Throwable;
use super::log_level::LogLevel;
use super::marker::Marker;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Owned capture of an error and its `source()` chain.
///
/// The live error is only borrowed for the duration of a log call; the
/// record keeps this rendering instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowableInfo {
    pub message: String,
    pub causes: Vec<String>,
}

impl ThrowableInfo {
    pub fn capture(error: &Throwable) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: error.to_string(),
            causes,
        }
    }
}

impl fmt::Display for ThrowableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for cause in &self.causes {
            write!(f, "\n  caused by: {}", cause)?;
        }
        Ok(())
    }
}

/// Source position of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    pub file: &'static str,
    pub line: u32,
    pub module_path: Option<&'static str>,
}

impl CallerLocation {
    pub const fn new(file: &'static str, line: u32, module_path: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            module_path,
        }
    }

    /// Location of the outermost `#[track_caller]` caller
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), None)
    }

    /// Last path component of `file`
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Immutable snapshot of one accepted log event
#[derive(Debug, Clone)]
pub struct LogRecord {
    sequence: u64,
    level: LogLevel,
    message: String,
    logger_name: String,
    marker: Option<Marker>,
    throwable: Option<ThrowableInfo>,
    timestamp: DateTime<Utc>,
    thread_id: String,
    thread_name: Option<String>,
    location: Option<CallerLocation>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: LogLevel,
        message: &str,
        logger_name: &str,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> Self {
        Self {
            sequence: NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed),
            level,
            message: Self::sanitize_message(message),
            logger_name: logger_name.to_string(),
            marker: marker.cloned(),
            throwable: throwable.map(ThrowableInfo::capture),
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Option<CallerLocation>) -> Self {
        self.location = location;
        self
    }

    /// Process-unique id; every handler sees the same value for one call
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn throwable(&self) -> Option<&ThrowableInfo> {
        self.throwable.as_ref()
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    pub fn location(&self) -> Option<&CallerLocation> {
        self.location.as_ref()
    }

    /// Thread name if the thread has one, otherwise its id
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
