//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::cell::RefCell;

thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// A single record on its way to a sink. The message already carries any prefix
/// and is kept exactly as logged; each encoding decides how to keep it on one line.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kept_verbatim() {
        let entry = LogEntry::new(LogLevel::Info, "first\nsecond\r\tthird");
        assert_eq!(entry.message, "first\nsecond\r\tthird");
    }

    #[test]
    fn test_thread_name_recorded() {
        let handle = std::thread::Builder::new()
            .name("worker-1".to_string())
            .spawn(|| LogEntry::new(LogLevel::Debug, "x"))
            .unwrap();
        let entry = handle.join().unwrap();
        assert_eq!(entry.thread_name.as_deref(), Some("worker-1"));
        assert!(!entry.thread_id.is_empty());
    }
}
