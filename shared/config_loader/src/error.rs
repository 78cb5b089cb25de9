use std::fmt;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating, reading or parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration file exists at the given path or search locations.
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),

    /// A non-comment line is not of the form `key=value`.
    Syntax { line: usize, content: String },

    /// A value could not be converted to the type its key requires.
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::Syntax { line, content } => {
                write!(f, "Line {}: expected key=value, got '{}'", line, content)
            }
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => write!(
                f,
                "Invalid value '{}' for '{}': expected {}",
                value, key, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let err = ConfigError::Syntax {
            line: 3,
            content: "filmstrip_only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: expected key=value, got 'filmstrip_only'"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "i_am_recorder".to_string(),
            value: "maybe".to_string(),
            expected: "a boolean",
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'maybe' for 'i_am_recorder': expected a boolean"
        );
    }
}
