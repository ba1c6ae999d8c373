//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, ConsoleStream, SharedBuffer};
pub use file::FileAppender;

pub use crate::core::Appender;
