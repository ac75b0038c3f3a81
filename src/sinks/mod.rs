//! Sink implementations

pub mod android;
#[cfg(feature = "console")]
pub mod console;
pub mod memory;

pub use android::{tag_from_name, AndroidSink, LogcatTextWriter, NativeLogWriter};
#[cfg(target_os = "android")]
pub use android::LiblogWriter;
#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use memory::MemorySink;

// Re-export trait for convenience
pub use crate::core::LogSink;
