//! Sink trait for platform output destinations

use super::{error::Result, log_record::LogRecord};

/// Converts an accepted record into platform-visible output.
///
/// Sinks are shared between threads, so any mutable state lives behind
/// interior locking. Errors returned here are absorbed by the owning handler.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
