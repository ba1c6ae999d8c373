//! Record encodings
//!
//! - Text: one human-readable line per record (default)
//! - Json: one JSON object per line

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output encoding for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO    ] [db] connected`
    #[default]
    Text,

    /// Example: `{"level":"INFO","message":"[db] connected","timestamp":"2025-01-08T10:30:45.123Z",...}`
    Json,
}

impl OutputFormat {
    /// Map an encoding token from configuration. Only `json` selects JSON.
    #[must_use]
    pub fn from_config_token(token: &str) -> Self {
        match token {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    /// Encode a record as a single line, without the trailing newline.
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(entry, timestamp_format, entry.level.to_str()),
            OutputFormat::Json => format_json(entry, timestamp_format),
        }
    }
}

/// Escape line breaks and tabs so a text record is always one line.
fn escape_text_message(message: &str) -> String {
    message
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Text layout shared by the console (which may color `level`) and file sinks.
pub(crate) fn format_text(
    entry: &LogEntry,
    timestamp_format: &TimestampFormat,
    level: impl std::fmt::Display,
) -> String {
    format!(
        "[{}] [{:8}] {}",
        timestamp_format.format(&entry.timestamp),
        level,
        escape_text_message(&entry.message)
    )
}

fn format_json(entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&entry.timestamp),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(entry.level.to_str().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(entry.message.clone()),
    );
    json_obj.insert(
        "thread_id".to_string(),
        serde_json::Value::String(entry.thread_id.clone()),
    );
    if let Some(ref name) = entry.thread_name {
        json_obj.insert(
            "thread_name".to_string(),
            serde_json::Value::String(name.clone()),
        );
    }

    serde_json::Value::Object(json_obj).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Info, "[db] connected");
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.starts_with('['));
        assert!(result.contains("] [INFO    ] [db] connected"));
        assert!(!result.contains('\n'));
    }

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(LogLevel::Error, "Error occurred");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
        assert!(parsed["thread_id"].is_string());
    }

    #[test]
    fn test_json_escapes_message() {
        let entry = LogEntry::new(LogLevel::Warn, r#"quote " and \ slash"#);
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::UnixMillis);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["message"], r#"quote " and \ slash"#);
        assert!(parsed["timestamp"].is_i64());
    }

    #[test]
    fn test_text_escapes_line_breaks() {
        let entry = LogEntry::new(LogLevel::Info, "first\nsecond\r\tthird");
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(!result.contains('\n'));
        assert!(result.ends_with("] first\\nsecond\\r\\tthird"));
    }

    #[test]
    fn test_text_keeps_escaped_and_raw_newline_apart() {
        let raw = LogEntry::new(LogLevel::Info, "a\nb");
        let literal = LogEntry::new(LogLevel::Info, r"a\nb");
        let format = TimestampFormat::Custom(String::new());

        assert_ne!(
            OutputFormat::Text.format(&raw, &format),
            OutputFormat::Text.format(&literal, &format)
        );
    }

    #[test]
    fn test_json_keeps_multi_line_message() {
        let entry = LogEntry::new(LogLevel::Error, "line one\nline two\ttabbed\r");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601);

        assert!(!result.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["message"], "line one\nline two\ttabbed\r");
    }

    #[test]
    fn test_encoding_tokens() {
        assert_eq!(OutputFormat::from_config_token("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config_token("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_config_token("JSON"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_config_token("xml"), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
