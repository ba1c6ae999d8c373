//! Timestamp formatting for log records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a record's timestamp is rendered.
///
/// # Examples
///
/// ```
/// use prefix_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Milliseconds since the Unix epoch: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Render for a JSON record: numeric formats stay numbers.
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::UnixMillis => datetime.timestamp_millis().into(),
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }
}
