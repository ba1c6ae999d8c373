//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log::Log,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    sink_config::{Destination, SinkConfig},
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, ConsoleStream, FileAppender};
use crate::prefix::PrefixLogger;
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;

/// Active sink. Destination, threshold and encoding always change together.
struct SinkState {
    config: SinkConfig,
    appender: Option<Box<dyn Appender>>,
}

/// A leveled logger bound to one sink: the console, a file, or nothing.
///
/// `Logger` is `Send + Sync`; share it by reference or `Arc`. The process-wide
/// instance used by the crate-level functions is [`crate::logger()`].
pub struct Logger {
    state: RwLock<SinkState>,
    console: ConsoleStream,
    use_colors: Option<bool>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger on standard output at DEBUG with text encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Reconfigure from raw tokens.
    ///
    /// `destination` is `stdout`, `none`, or a file path (truncated on open).
    /// `level_name` is a case-sensitive level name; unknown names select DEBUG.
    /// `encoding` is `json` for JSON records, anything else for text.
    ///
    /// If the file cannot be opened the logger falls back to the console and
    /// reports the failure as an ERROR record.
    pub fn configure(&self, destination: &str, level_name: &str, encoding: &str) {
        self.apply(&SinkConfig::from_tokens(destination, level_name, encoding));
    }

    /// Reconfigure from a typed [`SinkConfig`].
    pub fn apply(&self, config: &SinkConfig) {
        let mut active = config.clone();
        let (appender, open_error) = match &config.destination {
            Destination::Stdout => (Some(self.console_appender(config.encoding)), None),
            Destination::None => (None, None),
            Destination::File(path) => match FileAppender::create(path) {
                Ok(file) => {
                    let file = file
                        .with_output_format(config.encoding)
                        .with_timestamp_format(self.timestamp_format.clone());
                    (Some(Box::new(file) as Box<dyn Appender>), None)
                }
                Err(e) => {
                    active.destination = Destination::Stdout;
                    (Some(self.console_appender(config.encoding)), Some(e))
                }
            },
        };

        let previous = {
            let mut state = self.state.write();
            std::mem::replace(
                &mut *state,
                SinkState {
                    config: active,
                    appender,
                },
            )
        };
        if let Some(mut old) = previous.appender {
            if let Err(e) = old.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush {} appender: {}", old.name(), e);
            }
        }

        // Reported through the freshly bound console sink
        if let Some(err) = open_error {
            self.error(err.to_string());
        }
    }

    fn console_appender(&self, format: OutputFormat) -> Box<dyn Appender> {
        let mut appender = ConsoleAppender::with_stream(self.console.clone())
            .with_output_format(format)
            .with_timestamp_format(self.timestamp_format.clone());
        if let Some(use_colors) = self.use_colors {
            appender = appender.with_colors(use_colors);
        }
        Box::new(appender)
    }

    /// Snapshot of the active configuration. After a failed file open this
    /// reports the console fallback.
    pub fn config(&self) -> SinkConfig {
        self.state.read().config.clone()
    }

    /// Current threshold. Records below it are discarded.
    pub fn min_level(&self) -> LogLevel {
        self.state.read().config.level
    }

    /// Change only the threshold, keeping the current sink.
    pub fn set_min_level(&self, level: LogLevel) {
        self.state.write().config.level = level;
    }

    /// Whether a record at `level` would reach a sink.
    pub fn enabled(&self, level: LogLevel) -> bool {
        let state = self.state.read();
        state.appender.is_some() && level >= state.config.level
    }

    /// Write a record and report whether the sink accepted it.
    ///
    /// Records below the threshold, or sent while the destination is `none`,
    /// are discarded and count as success.
    pub fn try_log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        let mut state = self.state.write();
        if level < state.config.level {
            self.metrics.record_filtered();
            return Ok(());
        }
        let Some(appender) = state.appender.as_mut() else {
            self.metrics.record_filtered();
            return Ok(());
        };

        let entry = LogEntry::new(level, message.as_ref());
        match appender.append(&entry) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    /// Fire-and-forget write. Sink failures go to stderr.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if let Err(e) = self.try_log(level, message) {
            eprintln!("[LOGGER ERROR] Failed to write {} record: {}", level, e);
        }
    }

    /// Log at FINEST, the most verbose level.
    #[inline]
    pub fn finest(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Finest, message);
    }

    /// Log at FINE.
    #[inline]
    pub fn fine(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fine, message);
    }

    /// Log at DEBUG, the default threshold.
    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at TRACE. Note that TRACE ranks above DEBUG here.
    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    /// Log at INFO.
    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    /// Log at WARNING.
    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at ERROR.
    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at CRITICAL, the most severe level.
    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }

    /// WARNING record that reports sink failures to the caller.
    pub fn try_warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.try_log(LogLevel::Warn, message)
    }

    /// ERROR record that reports sink failures to the caller.
    pub fn try_error(&self, message: impl AsRef<str>) -> Result<()> {
        self.try_log(LogLevel::Error, message)
    }

    /// A prefixing logger that forwards to this one.
    ///
    /// ```
    /// use prefix_logger::{Logger, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let logger = Logger::builder().console(out.clone()).build();
    /// let db = logger.prefixed(["db", "pool"]);
    /// db.info("connected");
    /// assert!(out.contents().ends_with("[db] [pool] connected\n"));
    /// ```
    pub fn prefixed<I, S>(&self, prefixes: I) -> PrefixLogger<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PrefixLogger::with_logger(self, prefixes)
    }

    /// Counters for written, filtered and failed records.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush the active sink. A `none` destination has nothing to flush.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.write();
        match state.appender.as_mut() {
            Some(appender) => appender.flush(),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .field("console", &self.console)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] {} records failed to write ({:.1}% of attempts)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

impl Log for Logger {
    fn try_log(&self, level: LogLevel, message: &str) -> Result<()> {
        Self::try_log(self, level, message)
    }

    fn log(&self, level: LogLevel, message: &str) {
        Self::log(self, level, message);
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use prefix_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .output_format(OutputFormat::Json)
///     .destination(Destination::None)
///     .build();
/// assert!(!logger.enabled(LogLevel::Error));
/// ```
pub struct LoggerBuilder {
    config: SinkConfig,
    console: ConsoleStream,
    use_colors: Option<bool>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Start from the default sink: standard output, DEBUG, text.
    pub fn new() -> Self {
        Self {
            config: SinkConfig::default(),
            console: ConsoleStream::stdout(),
            use_colors: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the initial threshold.
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Set the record encoding.
    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.encoding = format;
        self
    }

    /// Set the initial destination. Accepts a [`Destination`] or a token such
    /// as `"none"` or a file path.
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: impl Into<Destination>) -> Self {
        self.config.destination = destination.into();
        self
    }

    /// Replace destination, threshold and encoding at once.
    #[must_use = "builder methods return a new value"]
    pub fn sink_config(mut self, config: SinkConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace standard output as the console stream. Used for `stdout`
    /// destinations and as the fallback when a file cannot be opened.
    #[must_use = "builder methods return a new value"]
    pub fn console<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = ConsoleStream::from_writer(writer);
        self
    }

    /// Force console colors on or off. By default they are on only for the
    /// real standard output.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    /// Timestamp layout for every record this logger writes.
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Create the logger and bind its initial sink. A file that cannot be
    /// opened falls back to the console, as with [`Logger::apply`].
    pub fn build(self) -> Logger {
        let logger = Logger {
            state: RwLock::new(SinkState {
                config: SinkConfig::default(),
                appender: None,
            }),
            console: self.console,
            use_colors: self.use_colors,
            timestamp_format: self.timestamp_format,
            metrics: LoggerMetrics::new(),
        };
        logger.apply(&self.config);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Fluent construction; see [`LoggerBuilder`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
