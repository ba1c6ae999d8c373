//! File appender implementation

use crate::core::{Appender, LogEntry, LoggerError, OutputFormat, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    writer: LineWriter<File>,
    path: PathBuf,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileAppender {
    /// Open `path` for writing, creating it if needed and truncating any
    /// existing content.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open_options()
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        Ok(Self {
            writer: LineWriter::new(file),
            path,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        })
    }

    #[cfg(unix)]
    fn open_options() -> OpenOptions {
        use std::os::unix::fs::OpenOptionsExt;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true).mode(0o644);
        options
    }

    #[cfg(not(unix))]
    fn open_options() -> OpenOptions {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        options
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// # Examples
    ///
    /// ```no_run
    /// use prefix_logger::appenders::FileAppender;
    /// use prefix_logger::TimestampFormat;
    ///
    /// let appender = FileAppender::create("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.output_format.format(entry, &self.timestamp_format);
        output.push('\n');

        self.writer.write_all(output.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "writing log file",
                format!("cannot append to '{}'", self.path.display()),
                e,
            )
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_create_truncates_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "stale line\n")?;

        let mut appender = FileAppender::create(&log_path)?;
        appender.append(&LogEntry::new(LogLevel::Info, "fresh line"))?;

        let content = fs::read_to_string(&log_path)?;
        assert!(!content.contains("stale line"));
        assert!(content.contains("fresh line"));
        Ok(())
    }

    #[test]
    fn test_record_visible_without_explicit_flush() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");

        let mut appender = FileAppender::create(&log_path)?;
        appender.append(&LogEntry::new(LogLevel::Warn, "line one"))?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("[WARNING ] line one"));
        Ok(())
    }

    #[test]
    fn test_json_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.jsonl");

        let mut appender = FileAppender::create(&log_path)?.with_output_format(OutputFormat::Json);
        for i in 0..3 {
            appender.append(&LogEntry::new(LogLevel::Debug, format!("Iteration {}", i)))?;
        }

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed["message"].is_string());
            assert_eq!(parsed["level"], "DEBUG");
        }
        Ok(())
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let bad_path = dir.path().join("no-such-dir").join("app.log");

        let result = FileAppender::create(&bad_path);
        assert!(matches!(result, Err(LoggerError::FileOpen { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_owner_read_write() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let log_path = dir.path().join("perm.log");
        let _appender = FileAppender::create(&log_path)?;

        let mode = fs::metadata(&log_path)?.permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
        Ok(())
    }
}
