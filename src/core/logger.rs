//! Main logger implementation

use super::{
    filter::Throwable,
    handler::{panic_message, Handler},
    log_level::LogLevel,
    log_record::{CallerLocation, LogRecord},
    marker::Marker,
};
use parking_lot::RwLock;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type HandlerList = Arc<Vec<Arc<dyn Handler>>>;

/// Run one handler call, absorbing a panic so the caller and the other
/// handlers are unaffected.
fn isolated<R>(
    handler: &Arc<dyn Handler>,
    operation: &str,
    call: impl FnOnce() -> R,
) -> Option<R> {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => Some(value),
        Err(panic_info) => {
            let name = catch_unwind(AssertUnwindSafe(|| handler.name().to_string()))
                .unwrap_or_else(|_| "<unnamed>".to_string());
            eprintln!(
                "[LOGGER CRITICAL] Handler '{}' panicked in {}: {}. \
                 Other handlers continue to function.",
                name,
                operation,
                panic_message(panic_info.as_ref())
            );
            None
        }
    }
}

/// Call-site facing router.
///
/// A logger owns a name and an ordered list of handlers. Every `log` call
/// works on a snapshot of that list taken when the call starts, so handlers
/// may be added or removed concurrently without disturbing calls in flight.
/// A handler that panics is treated as having rejected the call.
pub struct Logger {
    name: String,
    marker: Option<Marker>,
    include_location: AtomicBool,
    // Copy-on-write: readers clone the Arc, writers replace it
    handlers: RwLock<HandlerList>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
            include_location: AtomicBool::new(false),
            handlers: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Create a logger whose calls carry `marker` unless they supply their own
    #[must_use]
    pub fn with_marker(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            marker: Some(marker),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Whether records carry the source location of the log call
    pub fn include_location(&self) -> bool {
        self.include_location.load(Ordering::Relaxed)
    }

    pub fn set_include_location(&self, include: bool) {
        self.include_location.store(include, Ordering::Relaxed);
    }

    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        let mut handlers = self.handlers.write();
        let mut updated = Vec::with_capacity(handlers.len() + 1);
        updated.extend(handlers.iter().cloned());
        updated.push(handler);
        *handlers = Arc::new(updated);
    }

    /// Detach `handler` (matched by identity). Returns true if it was attached.
    pub fn remove_handler<H: Handler + ?Sized>(&self, handler: &Arc<H>) -> bool {
        let target = Arc::as_ptr(handler) as *const ();
        let mut handlers = self.handlers.write();
        if !handlers.iter().any(|h| Arc::as_ptr(h) as *const () == target) {
            return false;
        }
        let updated: Vec<_> = handlers
            .iter()
            .filter(|h| Arc::as_ptr(*h) as *const () != target)
            .cloned()
            .collect();
        *handlers = Arc::new(updated);
        true
    }

    pub fn clear_handlers(&self) {
        *self.handlers.write() = Arc::new(Vec::new());
    }

    /// Handlers attached at this instant
    pub fn handlers(&self) -> HandlerList {
        self.handlers.read().clone()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// True if any attached handler would accept this call.
    ///
    /// Asking does not spend filter budgets, so guarding a `log` call with
    /// this check costs nothing extra.
    pub fn is_loggable(
        &self,
        level: LogLevel,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) -> bool {
        let marker = marker.or(self.marker.as_ref());
        self.handlers().iter().any(|h| {
            isolated(h, "is_loggable", || {
                h.is_loggable(&self.name, level, marker, throwable)
            })
            .unwrap_or(false)
        })
    }

    /// Route one log call through the attached handlers.
    ///
    /// `message` is evaluated at most once, and only if some handler accepts
    /// the call. All accepting handlers receive the same record, in
    /// attachment order, on the calling thread.
    #[track_caller]
    pub fn log<F>(
        &self,
        level: LogLevel,
        message: F,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) where
        F: FnOnce() -> String,
    {
        self.log_at(CallerLocation::caller(), level, message, marker, throwable);
    }

    /// [`log`](Self::log) with an explicit source location
    pub fn log_at<F>(
        &self,
        location: CallerLocation,
        level: LogLevel,
        message: F,
        marker: Option<&Marker>,
        throwable: Option<&Throwable>,
    ) where
        F: FnOnce() -> String,
    {
        let handlers = self.handlers();
        if handlers.is_empty() {
            return;
        }

        let marker = marker.or(self.marker.as_ref());
        // Every decision is made before the first publish
        let accepting: Vec<&Arc<dyn Handler>> = handlers
            .iter()
            .filter(|h| {
                isolated(h, "is_loggable", || {
                    h.is_loggable(&self.name, level, marker, throwable)
                })
                .unwrap_or(false)
            })
            .collect();
        if accepting.is_empty() {
            return;
        }

        let location = self.include_location().then_some(location);
        let record = LogRecord::new(level, &message(), &self.name, marker, throwable)
            .with_location(location);
        for handler in accepting {
            isolated(handler, "publish", || handler.publish(&record));
        }
    }

    pub fn flush(&self) {
        for handler in self.handlers().iter() {
            isolated(handler, "flush", || handler.flush());
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, || message.into(), None, None);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, || message.into(), None, None);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, || message.into(), None, None);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, || message.into(), None, None);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, || message.into(), None, None);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, || message.into(), None, None);
    }

    /// Log with an attached error at `level`
    #[track_caller]
    pub fn log_error(&self, level: LogLevel, message: impl Into<String>, error: &Throwable) {
        self.log(level, || message.into(), None, Some(error));
    }

    /// Log with an explicit marker at `level`
    #[track_caller]
    pub fn log_marked(&self, level: LogLevel, marker: &Marker, message: impl Into<String>) {
        self.log(level, || message.into(), Some(marker), None);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    /// use rust_log_facade::sinks::MemorySink;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder("svc.auth")
    ///     .handler(HandlerBuilder::new().min_level(LogLevel::Info).build(sink.clone()))
    ///     .build();
    ///
    /// logger.debug("dropped");
    /// logger.info("kept");
    /// assert_eq!(sink.len(), 1);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .field("include_location", &self.include_location())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    name: String,
    marker: Option<Marker>,
    include_location: bool,
    handlers: Vec<Arc<dyn Handler>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
            include_location: false,
            handlers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Attach the call site's file and line to every record
    #[must_use = "builder methods return a new value"]
    pub fn include_location(mut self, include: bool) -> Self {
        self.include_location = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            marker: self.marker,
            include_location: AtomicBool::new(self.include_location),
            handlers: RwLock::new(Arc::new(self.handlers)),
        }
    }
}
