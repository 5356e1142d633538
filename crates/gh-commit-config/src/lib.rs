//! Configuration for gh-commit-viewer
//!
//! This crate provides:
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, ConfigFile, CONFIG_FILE};
