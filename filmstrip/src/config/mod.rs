//! Configuration Module
//!
//! Handles application configuration loading and management.

mod app_config;
mod interface_config;

pub use app_config::{AppConfig, LoadedConfig};
pub use interface_config::InterfaceConfig;
