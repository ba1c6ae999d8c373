//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink_config;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log::{Log, PrefixLog};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use sink_config::{Destination, SinkConfig};
pub use timestamp::TimestampFormat;
