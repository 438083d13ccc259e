//! Key bindings of the demo host
//!
//! Console navigation keys are delivered as taps on named buttons, the same
//! way a scene delivers taps on its button elements.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const CLEAR_BUTTON: &str = "clearButton";
pub const TO_TOP_BUTTON: &str = "toTopButton";
pub const SCROLL_UP_BUTTON: &str = "scrollUpButton";
pub const SCROLL_DOWN_BUTTON: &str = "scrollDownButton";
pub const SCROLL_TO_BOTTOM_BUTTON: &str = "scrollToBottomButton";

/// What a key press means to the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Tap(&'static str),
    Digit(char),
    RemoveLast,
    RemoveAll,
    LogSample,
    Pinch,
    Quit,
}

pub fn translate(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Char('c') => Some(Input::Tap(CLEAR_BUTTON)),
        KeyCode::Char('g') | KeyCode::Home => Some(Input::Tap(TO_TOP_BUTTON)),
        KeyCode::Char('k') | KeyCode::Up => Some(Input::Tap(SCROLL_UP_BUTTON)),
        KeyCode::Char('j') | KeyCode::Down => Some(Input::Tap(SCROLL_DOWN_BUTTON)),
        KeyCode::Char('G') | KeyCode::End => Some(Input::Tap(SCROLL_TO_BOTTOM_BUTTON)),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Input::Digit(c)),
        KeyCode::Backspace => Some(Input::RemoveLast),
        KeyCode::Delete => Some(Input::RemoveAll),
        KeyCode::Char('l') => Some(Input::LogSample),
        KeyCode::Char('+') => Some(Input::Pinch),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Footer hint line
pub fn hints() -> &'static str {
    " 0-9 pin | ⌫ del | Del clear pin | k/↑ j/↓ scroll | g top | G bottom | c clear | l log | + pinch | q quit "
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Input> {
        translate(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys_tap_buttons() {
        assert_eq!(press(KeyCode::Char('c')), Some(Input::Tap(CLEAR_BUTTON)));
        assert_eq!(press(KeyCode::Up), Some(Input::Tap(SCROLL_UP_BUTTON)));
        assert_eq!(press(KeyCode::Char('j')), Some(Input::Tap(SCROLL_DOWN_BUTTON)));
        assert_eq!(press(KeyCode::Char('G')), Some(Input::Tap(SCROLL_TO_BOTTOM_BUTTON)));
    }

    #[test]
    fn test_digits_and_quit() {
        assert_eq!(press(KeyCode::Char('7')), Some(Input::Digit('7')));
        assert_eq!(press(KeyCode::Esc), Some(Input::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
        assert_eq!(press(KeyCode::Char('x')), None);
    }
}
