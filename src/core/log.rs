//! Logging traits
//!
//! [`Log`] is the leveled-emit surface shared by [`Logger`](crate::Logger) and
//! [`PrefixLogger`](crate::PrefixLogger). Code that only needs to emit records
//! can take `&dyn Log` (or `impl Log`) and be handed a test double instead.

use super::{error::Result, log_level::LogLevel};

/// Something that accepts leveled records.
///
/// Only [`try_log`](Log::try_log) is required. The level helpers forward to
/// [`log`](Log::log), which reports sink failures on stderr.
///
/// # Example
///
/// ```
/// use prefix_logger::prelude::*;
///
/// fn announce(log: &dyn Log, port: u16) {
///     log.info(&format!("listening on {}", port));
/// }
///
/// let out = SharedBuffer::new();
/// let logger = Logger::builder().console(out.clone()).build();
/// announce(&logger, 8080);
/// announce(&logger.prefixed(["http"]), 8081);
///
/// let lines = out.lines();
/// assert!(lines[0].ends_with("] listening on 8080"));
/// assert!(lines[1].ends_with("] [http] listening on 8081"));
/// ```
pub trait Log {
    /// Emit a record and report whether the sink accepted it.
    fn try_log(&self, level: LogLevel, message: &str) -> Result<()>;

    fn log(&self, level: LogLevel, message: &str) {
        if let Err(e) = self.try_log(level, message) {
            eprintln!("[LOGGER ERROR] Failed to write {} record: {}", level, e);
        }
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn try_warn(&self, message: &str) -> Result<()> {
        self.try_log(LogLevel::Warn, message)
    }

    fn try_error(&self, message: &str) -> Result<()> {
        self.try_log(LogLevel::Error, message)
    }
}

/// A [`Log`] that tags each message with an accumulated `[token]` prefix.
pub trait PrefixLog: Log {
    /// Append `[token]` to the prefix.
    fn add_prefix(&mut self, token: &str);

    /// Drop every prefix token.
    fn clear_prefixes(&mut self);
}
