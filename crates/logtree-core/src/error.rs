//! Error types shared by loggers, backends and configuration

use thiserror::Error;

/// Errors that can occur while manipulating loggers
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A value handed to the logging API is not acceptable (e.g. an unknown severity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The severity backend failed or is not available
    #[error("Logging backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration contains a value that cannot be applied
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggingError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

pub type LoggingResult<T> = Result<T, LoggingError>;
