//! Logging macros with `format!`-style arguments.
//!
//! Each macro takes anything with a `log(level, message)` method: a
//! [`Logger`](crate::Logger), a [`PrefixLogger`](crate::PrefixLogger), the
//! process-wide logger returned by [`logger()`](crate::logger), or a
//! [`Log`](crate::Log) trait object.
//!
//! # Examples
//!
//! ```
//! use prefix_logger::prelude::*;
//! use prefix_logger::info;
//!
//! let logger = Logger::builder().destination("none").build();
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let api = logger.prefixed(["api"]);
//! info!(api, "user {} performed {}", 42, "login");
//! ```

/// Log at an explicit level.
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let logger = Logger::builder().destination("none").build();
/// use prefix_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// ```
/// # use prefix_logger::prelude::*;
/// # let logger = Logger::builder().destination("none").build();
/// use prefix_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
