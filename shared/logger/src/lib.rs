//! Thread-safe logging library with file and in-memory sinks.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::{LogCapture, Logger};
