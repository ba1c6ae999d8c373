//! # Prefix Logger
//!
//! A process-wide leveled logger whose destination (console, file, or nowhere),
//! threshold and encoding (text or JSON) can be changed at runtime, plus
//! [`PrefixLogger`], which tags every message with bracketed prefixes.
//!
//! ```
//! use prefix_logger::PrefixLogger;
//!
//! prefix_logger::configure("none", "INFO", "text");
//! prefix_logger::info("started");
//!
//! let mut log = PrefixLogger::new(["worker"]);
//! log.add_prefix("7");
//! log.warn("queue is empty"); // "[worker] [7] queue is empty"
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;
pub mod prefix;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, SharedBuffer};
    pub use crate::core::{
        Appender, Destination, Log, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, OutputFormat, PrefixLog, Result, SinkConfig, TimestampFormat,
    };
    pub use crate::prefix::PrefixLogger;
}

pub use appenders::{ConsoleAppender, ConsoleStream, FileAppender, SharedBuffer};
pub use crate::core::{
    Appender, Destination, Log, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, OutputFormat, PrefixLog, Result, SinkConfig, TimestampFormat,
};
pub use global::{apply, configure, debug, error, info, logger, try_error, try_warn, warn};
pub use prefix::PrefixLogger;
