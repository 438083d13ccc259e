//! Console options
//!
//! Options are fixed for the lifetime of a console. They can be built in code
//! or loaded from `.scene-console.toml`.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options recognised by the console at construction time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsoleOptions {
    /// Merge a new line into an earlier identical line instead of appending it
    #[serde(default = "default_true")]
    pub collapse: bool,

    /// Number of lines shown at once
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Keep the full history and scroll over it (false: drop the oldest lines)
    #[serde(default = "default_true")]
    pub keep_log: bool,

    /// Trace construction and every ingested entry through the `log` facade
    #[serde(default)]
    pub debug: bool,

    /// Allow pinch gestures to grow the font size
    #[serde(default)]
    pub resize_text: bool,

    /// Log a short line such as `ScrollUp()` when a navigation command runs
    #[serde(default = "default_true")]
    pub echo_commands: bool,

    /// Re-render period while a signal is watched
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Delay before the surface's placeholder text is wiped
    #[serde(default = "default_placeholder_delay_ms")]
    pub placeholder_delay_ms: u64,

    /// How long the `Clear()` feedback line stays on screen
    #[serde(default = "default_feedback_duration_ms")]
    pub feedback_duration_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_max_lines() -> usize {
    7
}

fn default_refresh_interval_ms() -> u64 {
    100
}

fn default_placeholder_delay_ms() -> u64 {
    1000
}

fn default_feedback_duration_ms() -> u64 {
    500
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            collapse: default_true(),
            max_lines: default_max_lines(),
            keep_log: default_true(),
            debug: false,
            resize_text: false,
            echo_commands: default_true(),
            refresh_interval_ms: default_refresh_interval_ms(),
            placeholder_delay_ms: default_placeholder_delay_ms(),
            feedback_duration_ms: default_feedback_duration_ms(),
        }
    }
}

impl ConsoleOptions {
    /// Load options from CWD first, then the user config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Loaded console options from file");
                    return options;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default console options");
        Self::default()
    }

    /// Refuse options the console cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::ZeroMaxLines);
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn placeholder_delay(&self) -> Duration {
        Duration::from_millis(self.placeholder_delay_ms)
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }
}
