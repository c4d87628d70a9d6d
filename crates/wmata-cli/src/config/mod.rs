//! Application configuration module.
//!
//! Reads the optional TOML config file holding client settings
//! (response format, timeout, base URL).

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, ClientConfig};
pub use paths::resolve_config_path;
