//! Console appender implementation

use crate::core::output_format::format_text;
use crate::core::{Appender, LogEntry, OutputFormat, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A console stream shared between a logger and the appenders it creates.
///
/// Defaults to the process's standard output; embedding code may substitute any
/// writer (for example a [`SharedBuffer`] in tests).
#[derive(Clone)]
pub struct ConsoleStream {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    is_stdout: bool,
}

impl ConsoleStream {
    pub fn stdout() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_stdout: true,
        }
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            is_stdout: false,
        }
    }

    pub fn is_stdout(&self) -> bool {
        self.is_stdout
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl Default for ConsoleStream {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleStream")
            .field("is_stdout", &self.is_stdout)
            .finish()
    }
}

/// In-memory writer whose clones share one buffer.
///
/// ```
/// use prefix_logger::{Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder().console(buffer.clone()).build();
/// logger.info("hello");
/// assert!(buffer.contents().contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct ConsoleAppender {
    stream: ConsoleStream,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    /// Appender on standard output, colored when the `console` feature is on.
    pub fn new() -> Self {
        Self::with_stream(ConsoleStream::stdout())
    }

    /// Colors are only enabled by default when the stream is the real stdout.
    pub fn with_stream(stream: ConsoleStream) -> Self {
        Self {
            use_colors: stream.is_stdout(),
            stream,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// # Example
    ///
    /// ```
    /// use prefix_logger::appenders::ConsoleAppender;
    /// use prefix_logger::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_entry(&self, entry: &LogEntry) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => self.format_colored(entry),
            _ => self.output_format.format(entry, &self.timestamp_format),
        }
    }

    #[cfg(feature = "console")]
    fn format_colored(&self, entry: &LogEntry) -> String {
        let level = format!("{:8}", entry.level.to_str()).color(entry.level.color_code());
        format_text(entry, &self.timestamp_format, level)
    }

    #[cfg(not(feature = "console"))]
    fn format_colored(&self, entry: &LogEntry) -> String {
        format_text(entry, &self.timestamp_format, entry.level)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_entry(entry);
        self.stream.write_line(&output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
