use std::path::PathBuf;

const CONFIG_FILE: &str = ".scene-console.toml";

/// Load config file content from CWD first, then the user config directory
///
/// Searches for:
/// 1. `.scene-console.toml` in the current working directory
/// 2. `config.toml` in the platform config directory (see [`crate::paths`])
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(user_config) = user_config_path() {
        if let Ok(content) = std::fs::read_to_string(&user_config) {
            log::debug!("Loaded config from {}", user_config.display());
            return Some(content);
        }
    }

    None
}

fn user_config_path() -> Option<PathBuf> {
    crate::paths::console_config_path().ok()
}
