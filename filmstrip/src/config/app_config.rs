//! Application Configuration
//!
//! Loads `filmstrip.conf`: logging settings, interface flags and the
//! session flags the store starts with.

use super::InterfaceConfig;
use crate::models::SessionConfig;
use config_loader::{ConfigError, ConfigSearch, parse_bool, parse_entries, parse_list};
use logging::LogLevel;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "filmstrip.conf";
const CONFIG_ENV_VAR: &str = "FILMSTRIP_CONFIG";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Layout and feature flags
    pub interface: InterfaceConfig,
    /// Session flags applied to the initial state
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("filmstrip.log"),
            log_level: LogLevel::Info,
            interface: InterfaceConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

/// Result of [`AppConfig::load`]
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// File that was found, whether or not it was accepted
    pub source: Option<PathBuf>,
    /// The file was found but invalid, so defaults are in use
    pub rejected: bool,
    /// Problems worth logging once a logger exists
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Parses configuration text.
    ///
    /// Format:
    /// ```text
    /// log_path=filmstrip.log
    /// log_level=debug
    /// toolbar_buttons=microphone,camera,hangup
    /// new_toolbox_enabled=false
    /// filmstrip_only=false
    /// enable_user_roles_based_on_token=false
    /// i_am_recorder=false
    /// ```
    ///
    /// Returns the configuration and the keys that were not recognised.
    pub fn parse(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = Self::default();
        let mut unknown = Vec::new();

        for entry in parse_entries(content)? {
            let key = entry.key.as_str();
            let value = entry.value.as_str();

            match key {
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => {
                    config.log_level = value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        expected: "debug, info, warn or error",
                    })?;
                }
                "toolbar_buttons" => config.interface.toolbar_buttons = parse_list(value),
                "new_toolbox_enabled" => {
                    config.interface.new_toolbox_enabled = parse_bool(key, value)?
                }
                "filmstrip_only" => config.interface.filmstrip_only = parse_bool(key, value)?,
                "enable_user_roles_based_on_token" => {
                    config.session.enable_user_roles_based_on_token = parse_bool(key, value)?
                }
                "i_am_recorder" => config.session.i_am_recorder = parse_bool(key, value)?,
                // Ignore unknown keys for forward compatibility
                _ => unknown.push(key.to_string()),
            }
        }

        Ok((config, unknown))
    }

    /// Where the configuration file is looked for
    fn search() -> ConfigSearch {
        let search = ConfigSearch::new(CONFIG_FILE_NAME).env_var(CONFIG_ENV_VAR);
        match dirs::config_dir() {
            Some(dir) => search.dir(dir.join("filmstrip")),
            None => search,
        }
    }

    /// Loads the configuration from the first location that has one.
    ///
    /// Tries `$FILMSTRIP_CONFIG`, `./config/`, `./` and the platform config
    /// directory. Falls back to defaults if no file exists or the file is
    /// invalid; the reason ends up in [`LoadedConfig::warnings`].
    pub fn load() -> LoadedConfig {
        match Self::search().find() {
            Ok(path) => Self::load_from(path),
            Err(_) => LoadedConfig {
                config: Self::default(),
                source: None,
                rejected: false,
                warnings: Vec::new(),
            },
        }
    }

    /// Loads the configuration at `path`, falling back to defaults if it
    /// cannot be read or parsed.
    pub fn load_from(path: PathBuf) -> LoadedConfig {
        let parsed =
            config_loader::load_config_file(&path).and_then(|content| Self::parse(&content));
        match parsed {
            Ok((config, unknown)) => LoadedConfig {
                config,
                source: Some(path),
                rejected: false,
                warnings: unknown
                    .into_iter()
                    .map(|key| format!("Unknown configuration key '{}' ignored", key))
                    .collect(),
            },
            Err(e) => LoadedConfig {
                config: Self::default(),
                warnings: vec![format!(
                    "Invalid configuration in {}: {} (using defaults)",
                    path.display(),
                    e
                )],
                source: Some(path),
                rejected: true,
            },
        }
    }
}
