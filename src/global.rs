//! Process-wide logger and the crate-level forwarding functions
//!
//! The shared logger is created on first use with the default configuration
//! (standard output, DEBUG, text), so logging works without any setup.

use crate::core::{LogLevel, Logger, Result, SinkConfig};
use once_cell::sync::Lazy;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger.
#[inline]
pub fn logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Reconfigure the process-wide logger. See [`Logger::configure`].
///
/// Intended for startup; records logged concurrently with a reconfiguration
/// go to either the old or the new sink.
pub fn configure(destination: &str, level_name: &str, encoding: &str) {
    logger().configure(destination, level_name, encoding);
}

/// Typed variant of [`configure`].
pub fn apply(config: &SinkConfig) {
    logger().apply(config);
}

pub fn log(level: LogLevel, message: impl AsRef<str>) {
    logger().log(level, message);
}

pub fn debug(message: impl AsRef<str>) {
    logger().debug(message);
}

pub fn info(message: impl AsRef<str>) {
    logger().info(message);
}

pub fn warn(message: impl AsRef<str>) {
    logger().warn(message);
}

pub fn error(message: impl AsRef<str>) {
    logger().error(message);
}

pub fn try_warn(message: impl AsRef<str>) -> Result<()> {
    logger().try_warn(message)
}

pub fn try_error(message: impl AsRef<str>) -> Result<()> {
    logger().try_error(message)
}
