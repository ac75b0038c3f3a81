//! Android log sink
//!
//! Records are mapped onto the platform's native priorities and written
//! under a short tag derived from the logger name. On Android the records go
//! to liblog; elsewhere [`LogcatTextWriter`] renders the same lines in the
//! `logcat -v brief` layout so the mapping can be exercised off-device.

use crate::core::{
    AndroidLevelMapper, LevelMapper, LogRecord, LogSink, NativeLevel, Result, ThrowableInfo,
};
use parking_lot::{Mutex, MutexGuard};
use std::io::Write;

/// Longest tag the platform accepts
pub const MAX_TAG_LENGTH: usize = 23;

/// Derive a platform tag from a logger name.
///
/// Takes the last path segment (split on `.` or `::`), drops any nested
/// suffix starting at `$`, and caps the result at [`MAX_TAG_LENGTH`] chars.
///
/// ```
/// use rust_log_facade::sinks::tag_from_name;
///
/// assert_eq!(tag_from_name("com.example.net.HttpClient"), "HttpClient");
/// assert_eq!(tag_from_name("app::net::Client$Retry"), "Client");
/// ```
pub fn tag_from_name(name: &str) -> String {
    let segment = match (name.rfind('.'), name.rfind("::")) {
        (Some(dot), Some(colons)) if colons > dot => &name[colons + 2..],
        (Some(dot), _) => &name[dot + 1..],
        (None, Some(colons)) => &name[colons + 2..],
        (None, None) => name,
    };
    let segment = match segment.find('$') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    };
    segment.chars().take(MAX_TAG_LENGTH).collect()
}

/// Destination for already-mapped native log lines
pub trait NativeLogWriter: Send + Sync {
    fn write_native(
        &self,
        level: NativeLevel,
        tag: &str,
        message: &str,
        throwable: Option<&ThrowableInfo>,
    ) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Writes `L/tag: message` lines to any [`Write`] target
pub struct LogcatTextWriter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> LogcatTextWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Lock the underlying output
    pub fn output(&self) -> MutexGuard<'_, W> {
        self.out.lock()
    }
}

impl LogcatTextWriter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> NativeLogWriter for LogcatTextWriter<W> {
    fn write_native(
        &self,
        level: NativeLevel,
        tag: &str,
        message: &str,
        throwable: Option<&ThrowableInfo>,
    ) -> Result<()> {
        let prefix = level.as_char();
        let mut out = self.out.lock();
        writeln!(out, "{}/{}: {}", prefix, tag, message)?;
        if let Some(throwable) = throwable {
            // logcat repeats the prefix on every line of a stack trace
            for line in throwable.to_string().lines() {
                writeln!(out, "{}/{}: {}", prefix, tag, line)?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        Ok(())
    }
}

#[cfg(target_os = "android")]
mod liblog {
    use std::os::raw::{c_char, c_int};

    #[link(name = "log")]
    extern "C" {
        pub fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
    }
}

/// Writes through the platform's `__android_log_write`
#[cfg(target_os = "android")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LiblogWriter;

#[cfg(target_os = "android")]
impl NativeLogWriter for LiblogWriter {
    fn write_native(
        &self,
        level: NativeLevel,
        tag: &str,
        message: &str,
        throwable: Option<&ThrowableInfo>,
    ) -> Result<()> {
        use std::ffi::CString;

        let text = match throwable {
            Some(throwable) => format!("{}\n{}", message, throwable),
            None => message.to_string(),
        };
        let tag = CString::new(tag)?;
        let text = CString::new(text)?;
        // SAFETY: both pointers come from live CStrings and liblog copies them
        let written =
            unsafe { liblog::__android_log_write(level.as_raw(), tag.as_ptr(), text.as_ptr()) };
        if written < 0 {
            return Err(crate::core::LoggerError::sink(
                "liblog",
                format!("__android_log_write returned {}", written),
            ));
        }
        Ok(())
    }
}

/// Sink that forwards records to a [`NativeLogWriter`] at the mapped priority
pub struct AndroidSink<W> {
    writer: W,
    mapper: AndroidLevelMapper,
    include_marker: bool,
}

impl<W: NativeLogWriter> AndroidSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mapper: AndroidLevelMapper,
            include_marker: true,
        }
    }

    /// Prefix messages with `[marker]` when the record carries one
    #[must_use]
    pub fn with_marker_prefix(mut self, include_marker: bool) -> Self {
        self.include_marker = include_marker;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl AndroidSink<LogcatTextWriter<std::io::Stderr>> {
    pub fn stderr() -> Self {
        Self::new(LogcatTextWriter::stderr())
    }
}

#[cfg(target_os = "android")]
impl AndroidSink<LiblogWriter> {
    pub fn liblog() -> Self {
        Self::new(LiblogWriter)
    }
}

impl<W: NativeLogWriter> LogSink for AndroidSink<W> {
    fn write(&self, record: &LogRecord) -> Result<()> {
        let level = self.mapper.to_native(record.level());
        let tag = tag_from_name(record.logger_name());
        let marker = record.marker().filter(|_| self.include_marker);
        if marker.is_none() && record.location().is_none() {
            return self
                .writer
                .write_native(level, &tag, record.message(), record.throwable());
        }

        let mut message = String::with_capacity(record.message().len() + 32);
        if let Some(location) = record.location() {
            message.push_str(&format!("({}:{}) ", location.file_name(), location.line));
        }
        if let Some(marker) = marker {
            message.push_str(&format!("[{}] ", marker.name()));
        }
        message.push_str(record.message());
        self.writer.write_native(level, &tag, &message, record.throwable())
    }

    fn flush(&self) -> Result<()> {
        self.writer.flush()
    }

    fn name(&self) -> &str {
        "android"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerLocation, LogLevel, Marker};

    #[derive(Default)]
    struct Recording {
        lines: Mutex<Vec<(NativeLevel, String, String, bool)>>,
    }

    impl NativeLogWriter for Recording {
        fn write_native(
            &self,
            level: NativeLevel,
            tag: &str,
            message: &str,
            throwable: Option<&ThrowableInfo>,
        ) -> Result<()> {
            self.lines
                .lock()
                .push((level, tag.to_string(), message.to_string(), throwable.is_some()));
            Ok(())
        }
    }

    #[test]
    fn test_tag_from_name() {
        assert_eq!(tag_from_name("svc.auth"), "auth");
        assert_eq!(tag_from_name("Plain"), "Plain");
        assert_eq!(tag_from_name("a.b.Outer$Inner"), "Outer");
        assert_eq!(tag_from_name("crate::module::Type"), "Type");
        assert_eq!(tag_from_name("a::b.c"), "c");
        assert_eq!(tag_from_name("a.b::c"), "c");
        assert_eq!(tag_from_name("$Anon"), "$Anon");
        assert_eq!(tag_from_name(""), "");
        assert_eq!(
            tag_from_name("com.example.AVeryLongClassNameThatKeepsGoing"),
            "AVeryLongClassNameThatK"
        );
    }

    #[test]
    fn test_levels_are_mapped() {
        let sink = AndroidSink::new(Recording::default());
        for level in LogLevel::ALL {
            sink.write(&LogRecord::new(level, "m", "svc.auth", None, None))
                .unwrap();
        }
        let natives: Vec<NativeLevel> = sink.writer().lines.lock().iter().map(|l| l.0).collect();
        assert_eq!(
            natives,
            vec![
                NativeLevel::Verbose,
                NativeLevel::Debug,
                NativeLevel::Info,
                NativeLevel::Warn,
                NativeLevel::Error,
                NativeLevel::Assert,
            ]
        );
        assert_eq!(sink.writer().lines.lock()[0].1, "auth");
    }

    #[test]
    fn test_marker_prefix() {
        let marker = Marker::new("AUDIT");
        let record = LogRecord::new(LogLevel::Info, "login", "svc.auth", Some(&marker), None);

        let sink = AndroidSink::new(Recording::default());
        sink.write(&record).unwrap();
        assert_eq!(sink.writer().lines.lock()[0].2, "[AUDIT] login");

        let plain = AndroidSink::new(Recording::default()).with_marker_prefix(false);
        plain.write(&record).unwrap();
        assert_eq!(plain.writer().lines.lock()[0].2, "login");
    }

    #[test]
    fn test_location_prefix() {
        let marker = Marker::new("NET");
        let record = LogRecord::new(LogLevel::Debug, "dial", "app.Client", Some(&marker), None)
            .with_location(Some(CallerLocation::new("src/net/client.rs", 88, None)));

        let sink = AndroidSink::new(Recording::default());
        sink.write(&record).unwrap();
        assert_eq!(sink.writer().lines.lock()[0].2, "(client.rs:88) [NET] dial");
    }

    #[test]
    fn test_logcat_text_layout() {
        let writer = LogcatTextWriter::new(Vec::new());
        let sink = AndroidSink::new(writer);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        sink.write(&LogRecord::new(LogLevel::Warn, "low space", "app.Storage", None, None))
            .unwrap();
        sink.write(&LogRecord::new(LogLevel::Critical, "gave up", "app.Storage", None, Some(&err)))
            .unwrap();

        let output = String::from_utf8(sink.writer().output().clone()).unwrap();
        assert_eq!(
            output,
            "W/Storage: low space\nA/Storage: gave up\nA/Storage: disk full\n"
        );
    }
}
