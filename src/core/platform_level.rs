//! Mapping between `LogLevel` and a host platform's native severities
//!
//! The reference target is Android's `android.util.Log` priority scale,
//! which has five ordinary severities plus an "assert" tier. The numeric
//! values match the platform constants so they can be handed to liblog
//! unchanged.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Android log priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum NativeLevel {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl NativeLevel {
    /// Raw priority value as understood by the platform
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Single-letter tag used by logcat (`V`, `D`, `I`, `W`, `E`, `A`)
    pub fn as_char(self) -> char {
        match self {
            NativeLevel::Verbose => 'V',
            NativeLevel::Debug => 'D',
            NativeLevel::Info => 'I',
            NativeLevel::Warn => 'W',
            NativeLevel::Error => 'E',
            NativeLevel::Assert => 'A',
        }
    }
}

impl TryFrom<i32> for NativeLevel {
    type Error = LoggerError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            2 => Ok(NativeLevel::Verbose),
            3 => Ok(NativeLevel::Debug),
            4 => Ok(NativeLevel::Info),
            5 => Ok(NativeLevel::Warn),
            6 => Ok(NativeLevel::Error),
            7 => Ok(NativeLevel::Assert),
            other => Err(LoggerError::UnknownNativeLevel(other)),
        }
    }
}

impl From<LogLevel> for NativeLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => NativeLevel::Verbose,
            LogLevel::Debug => NativeLevel::Debug,
            LogLevel::Info => NativeLevel::Info,
            LogLevel::Warn => NativeLevel::Warn,
            LogLevel::Error => NativeLevel::Error,
            LogLevel::Critical => NativeLevel::Assert,
        }
    }
}

impl From<NativeLevel> for LogLevel {
    fn from(native: NativeLevel) -> Self {
        match native {
            NativeLevel::Verbose => LogLevel::Trace,
            NativeLevel::Debug => LogLevel::Debug,
            NativeLevel::Info => LogLevel::Info,
            NativeLevel::Warn => LogLevel::Warn,
            NativeLevel::Error => LogLevel::Error,
            NativeLevel::Assert => LogLevel::Critical,
        }
    }
}

impl fmt::Display for NativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeLevel::Verbose => "VERBOSE",
            NativeLevel::Debug => "DEBUG",
            NativeLevel::Info => "INFO",
            NativeLevel::Warn => "WARN",
            NativeLevel::Error => "ERROR",
            NativeLevel::Assert => "ASSERT",
        };
        f.pad(name)
    }
}

impl FromStr for NativeLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "V" | "VERBOSE" => Ok(NativeLevel::Verbose),
            "D" | "DEBUG" => Ok(NativeLevel::Debug),
            "I" | "INFO" => Ok(NativeLevel::Info),
            "W" | "WARN" => Ok(NativeLevel::Warn),
            "E" | "ERROR" => Ok(NativeLevel::Error),
            "A" | "ASSERT" => Ok(NativeLevel::Assert),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Converts logical levels to a platform's severity scale and back.
///
/// Implementations must be total over `LogLevel` and round-trip:
/// `from_native(to_native(l)) == l` for every level.
pub trait LevelMapper: Send + Sync {
    type Native: Copy;

    fn to_native(&self, level: LogLevel) -> Self::Native;
    fn from_native(&self, native: Self::Native) -> LogLevel;
}

/// Maps to and from `android.util.Log` priorities
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidLevelMapper;

impl AndroidLevelMapper {
    /// Map a raw priority received from the platform.
    ///
    /// Values outside `VERBOSE..=ASSERT` (including `Log.OFF`-style
    /// sentinels) are rejected.
    pub fn from_raw(&self, raw: i32) -> Result<LogLevel> {
        NativeLevel::try_from(raw).map(|native| self.from_native(native))
    }
}

impl LevelMapper for AndroidLevelMapper {
    type Native = NativeLevel;

    #[inline]
    fn to_native(&self, level: LogLevel) -> NativeLevel {
        NativeLevel::from(level)
    }

    #[inline]
    fn from_native(&self, native: NativeLevel) -> LogLevel {
        LogLevel::from(native)
    }
}
