//! Tests for the process-wide logger and the crate-level functions
//!
//! The shared logger is global state, so everything runs in one test to keep
//! the steps ordered.

use prefix_logger::{Destination, LogLevel, OutputFormat, PrefixLogger, SinkConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_global_logger_lifecycle() {
    // Default configuration on first use
    assert_eq!(prefix_logger::logger().config(), SinkConfig::default());
    assert!(prefix_logger::logger().enabled(LogLevel::Debug));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("global.log");

    prefix_logger::configure(log_file.to_str().unwrap(), "INFO", "text");
    prefix_logger::debug("filtered");
    prefix_logger::info("plain info");
    prefix_logger::warn("plain warn");
    assert!(prefix_logger::try_error("plain error").is_ok());

    let mut log = PrefixLogger::new(["service"]);
    log.add_prefix("db");
    log.info("prefixed info");
    assert!(log.try_warn("prefixed warn").is_ok());

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(!content.contains("filtered"));
    assert!(lines[0].ends_with("[INFO    ] plain info"));
    assert!(lines[3].ends_with("[INFO    ] [service] [db] prefixed info"));
    assert!(lines[4].ends_with("[WARNING ] [service] [db] prefixed warn"));

    prefix_logger::apply(&SinkConfig {
        destination: Destination::File(log_file.clone()),
        level: LogLevel::Finest,
        encoding: OutputFormat::Json,
    });
    let bare = PrefixLogger::default();
    bare.error("no prefix");

    let content = fs::read_to_string(&log_file).unwrap();
    let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(record["level"], "ERROR");
    assert_eq!(record["message"], "no prefix");

    prefix_logger::configure("none", "DEBUG", "text");
    prefix_logger::error("nowhere");
    assert!(!prefix_logger::logger().enabled(LogLevel::Critical));
    assert_eq!(fs::read_to_string(&log_file).unwrap(), content);
}
