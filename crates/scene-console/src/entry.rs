//! Console entries and their one-line formatting

use crate::value::{LogValue, Signal};
use std::fmt;
use std::rc::Rc;

/// Text shown for a signal that cannot be read
pub const NOT_A_SIGNAL: &str = "[not a signal]";

/// One unit of console content
#[derive(Clone)]
pub enum Entry {
    /// A static line with a repeat counter
    Log { text: String, count: u32 },
    /// A live binding, sampled on every render
    Signal { label: String, source: Rc<dyn Signal> },
}

impl Entry {
    pub fn log(text: impl Into<String>) -> Self {
        Self::Log {
            text: text.into(),
            count: 1,
        }
    }

    pub fn is_signal(&self) -> bool {
        matches!(self, Self::Signal { .. })
    }

    /// Format the entry as one display line, newline included
    pub fn format_line(&self) -> String {
        match self {
            Self::Log { text, count } => {
                let counter = if *count <= 1 {
                    "   ".to_string()
                } else {
                    format!("[{}]", count)
                };
                format!(">>>{} {}\n", counter, text)
            }
            Self::Signal { label, source } => {
                let value = source
                    .try_read()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|_| NOT_A_SIGNAL.to_string());
                format!("<O>    {}:{}\n", label, value)
            }
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log { text, count } => f
                .debug_struct("Log")
                .field("text", text)
                .field("count", count)
                .finish(),
            Self::Signal { label, .. } => f.debug_struct("Signal").field("label", label).finish(),
        }
    }
}

/// Text a logged value is displayed as
///
/// Live values are read once; a failed read falls back to `[function]`.
pub(crate) fn display_text(value: &LogValue) -> String {
    match value {
        LogValue::Text(_) | LogValue::Number(_) | LogValue::Bool(_) => {
            value.plain_text().unwrap_or_default()
        }
        LogValue::Object => "[object]".to_string(),
        LogValue::Live(signal) => match signal.try_read() {
            Ok(v) => v.to_string(),
            Err(e) => {
                log::debug!("Live value unreadable at log time: {}", e);
                "[function]".to_string()
            }
        },
        LogValue::Undefined => "[undefined]".to_string(),
        LogValue::Unsupported => "[type not found]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{NotReadable, Value};
    use std::cell::Cell;

    #[test]
    fn test_single_log_line_is_padded() {
        assert_eq!(Entry::log("hello").format_line(), ">>>    hello\n");
    }

    #[test]
    fn test_repeated_log_line_shows_counter() {
        let entry = Entry::Log {
            text: "hello".to_string(),
            count: 3,
        };
        assert_eq!(entry.format_line(), ">>>[3] hello\n");
    }

    #[test]
    fn test_signal_line_reads_current_value() {
        let cell = Rc::new(Cell::new(1.0));
        let reader = Rc::clone(&cell);
        let entry = Entry::Signal {
            label: "x".to_string(),
            source: Rc::new(move || -> Result<Value, NotReadable> {
                Ok(Value::from(reader.get()))
            }),
        };
        assert_eq!(entry.format_line(), "<O>    x:1\n");
        cell.set(2.5);
        assert_eq!(entry.format_line(), "<O>    x:2.5\n");
    }

    #[test]
    fn test_unreadable_signal_line() {
        let entry = Entry::Signal {
            label: "gone".to_string(),
            source: Rc::new(|| -> Result<Value, NotReadable> {
                Err(NotReadable::new("dropped"))
            }),
        };
        assert_eq!(entry.format_line(), "<O>    gone:[not a signal]\n");
    }

    #[test]
    fn test_display_text_fallbacks() {
        assert_eq!(display_text(&LogValue::Object), "[object]");
        assert_eq!(display_text(&LogValue::Undefined), "[undefined]");
        assert_eq!(display_text(&LogValue::Unsupported), "[type not found]");
        assert_eq!(
            display_text(&LogValue::live(|| Err(NotReadable::new("no")))),
            "[function]"
        );
        assert_eq!(display_text(&LogValue::live(|| Ok(Value::from(7.0)))), "7");
        assert_eq!(display_text(&LogValue::from(false)), "false");
    }
}
