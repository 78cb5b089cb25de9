//! Component-tagged, level-filtered logger.
//!
//! A [`Logger`] never blocks the caller on file I/O: file records are handed to
//! a writer thread over a channel. Loggers derived with
//! [`Logger::for_component`] share their parent's sink, so one process writes
//! one file through one thread regardless of how many components log.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::{Sink, spawn_file_sink};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Thread-safe, non-blocking logger.
///
/// # Examples
///
/// ```no_run
/// use logging::{Logger, LogLevel};
/// use std::path::Path;
///
/// let logger = Logger::new(Path::new("filmstrip.log"), LogLevel::Info).unwrap();
/// let hover = logger.for_component("Hover");
/// hover.info("pointer entered");
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    sink: Sink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger appending to `log_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created or opened.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Ok(Self {
            sink: spawn_file_sink(log_path)?,
            level,
            component: None,
            console_output: false,
        })
    }

    /// Creates a logger that keeps formatted lines in memory.
    ///
    /// Writes are synchronous, so the returned [`LogCapture`] observes a
    /// record as soon as the logging call returns.
    pub fn in_memory(level: LogLevel) -> (Self, LogCapture) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Self {
            sink: Sink::Memory(Arc::clone(&lines)),
            level,
            component: None,
            console_output: false,
        };
        (logger, LogCapture { lines })
    }

    /// Mirrors every recorded line to stdout as well.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Returns a logger tagged with `component` that shares this logger's sink,
    /// level and console setting.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            sink: self.sink.clone(),
            level: self.level,
            component: Some(component.to_string()),
            console_output: self.console_output,
        }
    }

    /// Minimum level that is recorded.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if a record at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Blocks until every record logged so far through this sink is written.
    ///
    /// Call before `std::process::exit`, which skips destructors. Otherwise
    /// dropping the last clone of a logger has the same effect.
    pub fn flush(&self) {
        self.sink.flush();
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let msg = LogMessage::new(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", msg.line());
        }
        self.sink.write(msg);
    }
}

/// Read handle over the lines written by an in-memory [`Logger`].
#[derive(Clone, Debug)]
pub struct LogCapture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    /// Snapshot of every captured line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Returns true if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    /// Number of captured lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}
