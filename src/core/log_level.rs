//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Finest = 0,
    Fine = 1,
    #[default]
    Debug = 2,
    Trace = 3,
    Info = 4,
    #[serde(rename = "WARNING", alias = "WARN")]
    Warn = 5,
    Error = 6,
    Critical = 7,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Finest,
        LogLevel::Fine,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Finest => "FINEST",
            LogLevel::Fine => "FINE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Map a threshold token from configuration to a level.
    ///
    /// Matching is case-sensitive against the names returned by [`LogLevel::to_str`].
    /// Unrecognized tokens fall back to [`LogLevel::Debug`].
    #[must_use]
    pub fn from_config_token(token: &str) -> Self {
        match token {
            "FINEST" => LogLevel::Finest,
            "FINE" => LogLevel::Fine,
            "DEBUG" => LogLevel::Debug,
            "TRACE" => LogLevel::Trace,
            "INFO" => LogLevel::Info,
            "WARNING" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            "CRITICAL" => LogLevel::Critical,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Finest | LogLevel::Fine => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Trace => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

/// Lenient parsing for application config files: case-insensitive, accepts `WARN`.
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FINEST" => Ok(LogLevel::Finest),
            "FINE" => Ok(LogLevel::Fine),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
