use scene_console_config::ConfigError;
use thiserror::Error;

/// Reasons a console refuses to be built
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("invalid console options: {0}")]
    InvalidOptions(#[from] ConfigError),
}
