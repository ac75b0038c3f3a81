//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Level name that does not match any `LogLevel`
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Native platform level outside the mapped domain
    #[error("Unknown native log level: {0}")]
    UnknownNativeLevel(i32),

    /// Output sink could not accept the record
    #[error("Sink '{sink}' unavailable: {message}")]
    SinkUnavailable { sink: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Text handed to a C sink contained an interior NUL byte
    #[error("Message contains an interior NUL byte: {0}")]
    InteriorNul(#[from] std::ffi::NulError),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink unavailable error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkUnavailable {
            sink: sink.into(),
            message: message.into(),
        }
    }
}
