//! Configuration and file management for the scene console
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file discovery (TOML)
//! - Console options (ConsoleOptions) and their validation

pub mod config_file;
pub mod console_options;
pub mod error;
pub mod paths;

pub use config_file::load_config_file;
pub use console_options::ConsoleOptions;
pub use error::ConfigError;
pub use paths::{cache_dir, config_dir};
