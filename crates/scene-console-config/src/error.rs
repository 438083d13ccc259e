use thiserror::Error;

/// Reasons a set of console options is refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_lines must be at least 1")]
    ZeroMaxLines,

    #[error("refresh_interval_ms must be at least 1")]
    ZeroRefreshInterval,
}
