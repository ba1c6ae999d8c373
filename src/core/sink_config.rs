//! Sink configuration: where records go, how verbose, and how they are encoded

use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Output destination of the shared logger.
///
/// Parsed from a destination token: `stdout`, `none`, or a file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    #[default]
    Stdout,
    /// Discard every record
    None,
    /// Truncated on open, created if absent
    File(PathBuf),
}

impl Destination {
    #[must_use]
    pub fn from_config_token(token: &str) -> Self {
        match token {
            "stdout" => Destination::Stdout,
            "none" => Destination::None,
            path => Destination::File(PathBuf::from(path)),
        }
    }
}

impl From<&str> for Destination {
    fn from(token: &str) -> Self {
        Destination::from_config_token(token)
    }
}

impl From<String> for Destination {
    fn from(token: String) -> Self {
        Destination::from_config_token(&token)
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        destination.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::None => f.write_str("none"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Typed form of the `(destination, level, encoding)` configuration triple.
///
/// Deserializable so applications can embed it in their own config files:
///
/// ```
/// use prefix_logger::{Destination, LogLevel, OutputFormat, SinkConfig};
///
/// let config: SinkConfig =
///     serde_json::from_str(r#"{"destination":"/tmp/app.log","level":"WARNING"}"#).unwrap();
/// assert_eq!(config.destination, Destination::File("/tmp/app.log".into()));
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.encoding, OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub destination: Destination,
    pub level: LogLevel,
    pub encoding: OutputFormat,
}

impl SinkConfig {
    /// Build from raw tokens. Unknown levels map to DEBUG and unknown
    /// encodings to text.
    #[must_use]
    pub fn from_tokens(destination: &str, level_name: &str, encoding: &str) -> Self {
        Self {
            destination: Destination::from_config_token(destination),
            level: LogLevel::from_config_token(level_name),
            encoding: OutputFormat::from_config_token(encoding),
        }
    }
}
