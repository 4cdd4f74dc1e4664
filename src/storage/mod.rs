//! Settings storage.

pub mod config;

pub use config::{config_path, load_from_path, load_settings, ConfigError};
