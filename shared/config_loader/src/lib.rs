//! # Config Loader
//!
//! Locates, reads and tokenizes `key=value` configuration files.
//!
//! The loader knows nothing about the keys themselves: it hands back ordered
//! [`Entry`] values and a few typed value parsers, and the consumer decides
//! what each key means.
//!
//! ```no_run
//! use config_loader::{ConfigSearch, parse_bool, parse_entries};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = ConfigSearch::new("filmstrip.conf")
//!         .env_var("FILMSTRIP_CONFIG")
//!         .load()?;
//!
//!     for entry in parse_entries(&content)? {
//!         if entry.key == "filmstrip_only" {
//!             let enabled = parse_bool(&entry.key, &entry.value)?;
//!             println!("filmstrip_only = {}", enabled);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the whole configuration file at `path`.
///
/// The content is neither parsed nor validated.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Ordered list of places to look for a configuration file.
///
/// Lookup order:
/// 1. the environment variable set with [`ConfigSearch::env_var`], if it points
///    at an existing file
/// 2. `./config/{filename}`
/// 3. `./{filename}`
/// 4. every directory added with [`ConfigSearch::dir`], in insertion order
#[derive(Debug, Clone)]
pub struct ConfigSearch {
    filename: String,
    env_var: Option<String>,
    extra_dirs: Vec<PathBuf>,
}

impl ConfigSearch {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            env_var: None,
            extra_dirs: Vec::new(),
        }
    }

    /// Consults `name` first; its value is a full path to the file.
    pub fn env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = Some(name.into());
        self
    }

    /// Adds a fallback directory searched after the working directory.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extra_dirs.push(dir.into());
        self
    }

    /// Every candidate path in lookup order, existing or not.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(path) = self.env_var.as_ref().and_then(|name| env::var(name).ok()) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from("./config").join(&self.filename));
        paths.push(PathBuf::from("./").join(&self.filename));
        for dir in &self.extra_dirs {
            paths.push(dir.join(&self.filename));
        }

        paths
    }

    /// Returns the first candidate that exists.
    pub fn find(&self) -> Result<PathBuf> {
        self.candidates()
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| {
                ConfigError::FileNotFound(format!(
                    "'{}' not found in any search location",
                    self.filename
                ))
            })
    }

    /// Finds the file and reads it.
    pub fn load(&self) -> Result<String> {
        let path = self.find()?;
        load_config_file(path)
    }
}

/// One `key=value` line from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number the entry came from.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Splits configuration text into entries.
///
/// Blank lines and lines starting with `#` are skipped. Keys and values are
/// trimmed; a value may be empty. Any other line without `=` (or with an empty
/// key) is a [`ConfigError::Syntax`] error.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let syntax_error = || ConfigError::Syntax {
            line: index + 1,
            content: line.to_string(),
        };
        let (key, value) = line.split_once('=').ok_or_else(syntax_error)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(syntax_error());
        }

        entries.push(Entry {
            line: index + 1,
            key: key.to_string(),
            value: value.trim().to_string(),
        });
    }

    Ok(entries)
}

/// Parses `true/false`, `yes/no`, `on/off` or `1/0`, ignoring case.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}

/// Splits a comma-separated value, dropping empty items.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config_file("/path/that/does/not/exist.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_search_finds_extra_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search_extra_dir_test.conf");
        fs::write(&path, "a=1\n").unwrap();

        let search = ConfigSearch::new("search_extra_dir_test.conf").dir(dir.path());
        assert_eq!(search.find().unwrap(), path);
        assert_eq!(search.load().unwrap(), "a=1\n");
    }

    #[test]
    fn test_search_missing_file() {
        let search = ConfigSearch::new("file_that_definitely_does_not_exist_12345.conf");
        assert!(matches!(search.find(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_candidates_order_without_env() {
        let search = ConfigSearch::new("x.conf")
            .env_var("CONFIG_LOADER_TEST_UNSET_VARIABLE")
            .dir("/etc/app");
        let candidates = search.candidates();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], PathBuf::from("./config/x.conf"));
        assert_eq!(candidates[1], PathBuf::from("./x.conf"));
        assert_eq!(candidates[2], PathBuf::from("/etc/app/x.conf"));
    }

    #[test]
    fn test_parse_entries_skips_comments_and_blanks() {
        let content = "\
            # interface\n\
            \n\
            toolbar_buttons = camera, hangup\n\
            log_path=\n\
        ";
        let entries = parse_entries(content).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "toolbar_buttons");
        assert_eq!(entries[0].value, "camera, hangup");
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[1].key, "log_path");
        assert_eq!(entries[1].value, "");
    }

    #[test]
    fn test_parse_entries_rejects_bare_words() {
        let err = parse_entries("a=1\nfilmstrip_only\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Syntax {
                line: 2,
                content: "filmstrip_only".to_string(),
            }
        );
        assert!(parse_entries("=value").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("k", "TRUE").unwrap());
        assert!(parse_bool("k", "on").unwrap());
        assert!(!parse_bool("k", "0").unwrap());
        assert!(!parse_bool("k", "No").unwrap());
        assert!(matches!(
            parse_bool("k", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" microphone, ,camera ,"),
            vec!["microphone".to_string(), "camera".to_string()]
        );
        assert!(parse_list("").is_empty());
    }
}
