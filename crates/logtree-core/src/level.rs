//! Severity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoggingError, LoggingResult};

/// Severity level of a logger
///
/// The raw values match the backend severity scale. `Unset` means no level
/// has been configured for that exact logger name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    #[default]
    Unset = 0,
    Debug = 10,
    Info = 20,
    Warn = 30,
    Error = 40,
    Fatal = 50,
}

impl Level {
    /// All levels, from `Unset` to `Fatal`
    pub const ALL: [Level; 6] = [
        Level::Unset,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Raw severity value understood by the backend
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Unset => "UNSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    pub fn is_unset(self) -> bool {
        self == Level::Unset
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Level {
    type Error = LoggingError;

    fn try_from(raw: i32) -> LoggingResult<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_raw() == raw)
            .ok_or_else(|| LoggingError::invalid_argument(format!("unknown severity value {}", raw)))
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.as_raw()
    }
}

impl FromStr for Level {
    type Err = LoggingError;

    fn from_str(s: &str) -> LoggingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "unset" => Ok(Level::Unset),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggingError::invalid_argument(format!("unknown severity name '{}'", s))),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LoggingError;

    fn try_from(s: String) -> LoggingResult<Self> {
        s.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_lowercase()
    }
}
