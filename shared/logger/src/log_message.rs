//! Internal log record.

use crate::log_level::LogLevel;
use chrono::Local;

/// A single formatted-on-demand log record.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Creates a record stamped with the current local time.
    pub fn new(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// Formats the record as one line without the trailing newline:
    /// `[timestamp] LEVEL [component]: message`
    pub fn line(&self) -> String {
        match self.component {
            Some(ref component) => format!(
                "[{}] {} [{}]: {}",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_component() {
        let msg = LogMessage::new(LogLevel::Debug, Some("Filmstrip"), "hover settled");
        let line = msg.line();

        assert!(line.contains("DEBUG [Filmstrip]: hover settled"));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_line_without_component() {
        let msg = LogMessage::new(LogLevel::Error, None, "boom");
        assert!(msg.line().ends_with("ERROR: boom"));
    }

    #[test]
    fn test_timestamp_format() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test");
        let ts = &msg.timestamp;

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[13..14], ":");
        assert_eq!(&ts[19..20], ".");
    }
}
