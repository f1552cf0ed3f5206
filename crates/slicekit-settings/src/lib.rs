//! Job configuration management for SliceKit
//!
//! Loads, validates and saves [`JobConfig`] files in JSON or TOML format,
//! with a default location under the platform configuration directory.

pub mod config;
pub mod error;

pub use config::{ConfigFormat, JobConfig, OutputSettings, MIN_SEGMENTS};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
