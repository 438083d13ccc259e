//! Navigation commands and their button wiring

use serde::{Deserialize, Serialize};

/// A no-argument console command, as triggered by a button or key
///
/// Serialized as snake_case (e.g., `ScrollToTop` -> `"scroll_to_top"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleCommand {
    /// Empty the log
    Clear,
    /// Show the oldest lines
    ScrollToTop,
    /// Move the window one line towards older entries
    ScrollUp,
    /// Move the window one line towards newer entries
    ScrollDown,
    /// Pin the window to the newest lines
    ScrollToBottom,
}

impl ConsoleCommand {
    /// Operator feedback line logged when the command runs
    pub fn feedback(&self) -> &'static str {
        match self {
            Self::Clear => "Clear()",
            Self::ScrollToTop => "ScrollToTop()",
            Self::ScrollUp => "ScrollUp()",
            Self::ScrollDown => "ScrollDown()",
            Self::ScrollToBottom => "ScrollToBottom()",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Binding {
        command: ConsoleCommand,
    }

    #[test]
    fn test_command_deserializes_from_snake_case() {
        let binding: Binding = toml::from_str(r#"command = "scroll_to_top""#).unwrap();
        assert_eq!(binding.command, ConsoleCommand::ScrollToTop);
    }

    #[test]
    fn test_feedback_names_the_command() {
        assert_eq!(ConsoleCommand::Clear.feedback(), "Clear()");
        assert_eq!(ConsoleCommand::ScrollDown.feedback(), "ScrollDown()");
    }
}
