//! Prefix-tagging logger
//!
//! A [`PrefixLogger`] borrows a [`Logger`] and prepends an accumulated prefix
//! such as `[api] [v2]` to every message it forwards.

use crate::core::{Log, LogLevel, Logger, PrefixLog, Result};
use std::fmt;

/// Forwards leveled records to a [`Logger`] with a `[token] [token]` prefix.
///
/// Clones carry their own prefix, so tagging a clone never affects the original.
#[derive(Clone)]
pub struct PrefixLogger<'a> {
    logger: &'a Logger,
    prefix: String,
}

impl PrefixLogger<'static> {
    /// Prefixing logger over the process-wide logger.
    ///
    /// ```
    /// use prefix_logger::PrefixLogger;
    ///
    /// let mut log = PrefixLogger::new(["a", "b"]);
    /// log.add_prefix("c");
    /// assert_eq!(log.prefix(), "[a] [b] [c]");
    /// ```
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_logger(crate::global::logger(), prefixes)
    }
}

impl Default for PrefixLogger<'static> {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl<'a> PrefixLogger<'a> {
    /// Prefixing logger over an explicit `logger`, starting with `prefixes`.
    pub fn with_logger<I, S>(logger: &'a Logger, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixed = Self {
            logger,
            prefix: String::new(),
        };
        for token in prefixes {
            prefixed.add_prefix(token);
        }
        prefixed
    }

    /// Append `[token]`. Any string is accepted, including an empty one.
    pub fn add_prefix(&mut self, token: impl AsRef<str>) {
        if !self.prefix.is_empty() {
            self.prefix.push(' ');
        }
        self.prefix.push('[');
        self.prefix.push_str(token.as_ref());
        self.prefix.push(']');
    }

    /// Drop every token. Later records are forwarded without decoration.
    pub fn clear_prefixes(&mut self) {
        self.prefix.clear();
    }

    /// The accumulated prefix, e.g. `[a] [b]`. Empty when cleared.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    /// `prefix + " " + message`; the message is returned as-is when there is
    /// no prefix.
    pub fn decorate(&self, message: &str) -> String {
        if self.prefix.is_empty() {
            return message.to_string();
        }
        let mut line = String::with_capacity(self.prefix.len() + 1 + message.len());
        line.push_str(&self.prefix);
        line.push(' ');
        line.push_str(message);
        line
    }

    /// Fire-and-forget write through the underlying logger.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.logger.log(level, self.decorate(message.as_ref()));
    }

    /// Decorated write that reports sink failures.
    pub fn try_log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        self.logger.try_log(level, self.decorate(message.as_ref()))
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn try_warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.try_log(LogLevel::Warn, message)
    }

    pub fn try_error(&self, message: impl AsRef<str>) -> Result<()> {
        self.try_log(LogLevel::Error, message)
    }
}

impl Log for PrefixLogger<'_> {
    fn try_log(&self, level: LogLevel, message: &str) -> Result<()> {
        Self::try_log(self, level, message)
    }

    fn log(&self, level: LogLevel, message: &str) {
        Self::log(self, level, message);
    }
}

impl PrefixLog for PrefixLogger<'_> {
    fn add_prefix(&mut self, token: &str) {
        Self::add_prefix(self, token);
    }

    fn clear_prefixes(&mut self) {
        Self::clear_prefixes(self);
    }
}

impl fmt::Debug for PrefixLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixLogger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::SharedBuffer;

    fn captured() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder().console(buffer.clone()).build();
        (logger, buffer)
    }

    #[test]
    fn test_prefix_accumulation_order() {
        let (logger, buffer) = captured();
        let mut log = logger.prefixed(["a", "b"]);
        log.add_prefix("c");

        assert_eq!(log.prefix(), "[a] [b] [c]");
        log.info("body 42");
        assert!(buffer.contents().ends_with("] [a] [b] [c] body 42\n"));
    }

    #[test]
    fn test_clear_prefixes() {
        let (logger, buffer) = captured();
        let mut log = logger.prefixed(["service"]);
        log.clear_prefixes();
        log.warn("plain body");

        assert_eq!(log.prefix(), "");
        assert!(buffer.contents().ends_with("[WARNING ] plain body\n"));
    }

    #[test]
    fn test_add_after_clear() {
        let (logger, _buffer) = captured();
        let mut log = logger.prefixed(["old"]);
        log.clear_prefixes();
        log.add_prefix("new");
        assert_eq!(log.prefix(), "[new]");
    }

    #[test]
    fn test_empty_token_accepted() {
        let (logger, _buffer) = captured();
        let log = logger.prefixed(["", "x"]);
        assert_eq!(log.prefix(), "[] [x]");
    }

    #[test]
    fn test_formatting_does_not_mutate_prefix() {
        let (logger, _buffer) = captured();
        let log = logger.prefixed(["db"]);
        log.debug("one");
        log.error("two");
        assert_eq!(log.decorate("three"), "[db] three");
        assert_eq!(log.prefix(), "[db]");
    }

    #[test]
    fn test_gated_by_shared_threshold() {
        let (logger, buffer) = captured();
        let log = logger.prefixed(["api"]);
        logger.configure("stdout", "ERROR", "text");

        log.info("hidden");
        assert!(buffer.is_empty());
        assert!(log.try_error("visible").is_ok());
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_clones_are_independent() {
        let (logger, _buffer) = captured();
        let base = logger.prefixed(["core"]);
        let mut child = base.clone();
        child.add_prefix("child");

        assert_eq!(base.prefix(), "[core]");
        assert_eq!(child.prefix(), "[core] [child]");
    }
}
