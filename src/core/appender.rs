//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A sink that encodes and writes records. The logger holds at most one.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
