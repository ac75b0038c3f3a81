//! Console sink implementation

use crate::core::{LogLevel, LogRecord, LogSink, Result, TimestampFormat};
use colored::Colorize;
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
    include_thread: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            include_thread: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// # Examples
    ///
    /// ```
    /// use rust_log_facade::sinks::ConsoleSink;
    /// use rust_log_facade::TimestampFormat;
    ///
    /// let sink = ConsoleSink::new().with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_thread(mut self, include_thread: bool) -> Self {
        self.include_thread = include_thread;
        self
    }

    fn format_text(&self, record: &LogRecord) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.level())
                .color(record.level().color_code())
                .to_string()
        } else {
            format!("{:5}", record.level())
        };

        let mut line = format!(
            "[{}] [{}]",
            self.timestamp_format.format(record.timestamp()),
            level_str
        );
        if self.include_thread {
            line.push_str(&format!(" [{}]", record.thread_label()));
        }
        line.push(' ');
        line.push_str(record.logger_name());
        if let Some(location) = record.location() {
            line.push_str(&format!(" ({})", location));
        }
        line.push_str(" -");
        if let Some(marker) = record.marker() {
            line.push_str(&format!(" <{}>", marker));
        }
        line.push(' ');
        line.push_str(record.message());
        if let Some(throwable) = record.throwable() {
            line.push_str(&format!("\n  error: {}", throwable));
        }
        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &LogRecord) -> Result<()> {
        let output = self.format_text(record);

        // Route Error and Critical levels to stderr, others to stdout
        match record.level() {
            LogLevel::Error | LogLevel::Critical => {
                writeln!(std::io::stderr().lock(), "{}", output)?
            }
            _ => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerLocation, Marker};

    #[test]
    fn test_plain_format() {
        let sink = ConsoleSink::with_colors(false)
            .with_thread(false)
            .with_timestamp_format(TimestampFormat::Custom("T".into()));
        let marker = Marker::new("AUDIT");
        let record =
            LogRecord::new(LogLevel::Warn, "disk low", "svc.storage", Some(&marker), None);
        assert_eq!(
            sink.format_text(&record),
            "[T] [WARN ] svc.storage - <AUDIT> disk low"
        );
    }

    #[test]
    fn test_location_follows_logger_name() {
        let sink = ConsoleSink::with_colors(false)
            .with_thread(false)
            .with_timestamp_format(TimestampFormat::Custom("T".into()));
        let record = LogRecord::new(LogLevel::Info, "ready", "svc", None, None)
            .with_location(Some(CallerLocation::new("src/main.rs", 12, None)));
        assert_eq!(
            sink.format_text(&record),
            "[T] [INFO ] svc (src/main.rs:12) - ready"
        );
    }

    #[test]
    fn test_throwable_on_following_line() {
        let sink = ConsoleSink::with_colors(false)
            .with_thread(false)
            .with_timestamp_format(TimestampFormat::Custom("T".into()));
        let err = std::io::Error::new(std::io::ErrorKind::Other, "eof");
        let record = LogRecord::new(LogLevel::Error, "read failed", "io", None, Some(&err));
        assert_eq!(
            sink.format_text(&record),
            "[T] [ERROR] io - read failed\n  error: eof"
        );
    }

    #[test]
    fn test_write_does_not_fail() {
        let sink = ConsoleSink::new();
        let record = LogRecord::new(LogLevel::Info, "hello", "app", None, None);
        assert!(sink.write(&record).is_ok());
        assert!(sink.flush().is_ok());
    }
}
