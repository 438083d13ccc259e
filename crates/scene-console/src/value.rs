//! Values that can be logged or watched
//!
//! Callers tag their values before handing them to the console, so the
//! console never inspects types at runtime.

use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// A sampled value, as shown on screen
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A signal could not be sampled right now
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("signal is not readable: {reason}")]
pub struct NotReadable {
    pub reason: String,
}

impl NotReadable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A live value owned by the host that the console samples on demand
pub trait Signal {
    fn try_read(&self) -> Result<Value, NotReadable>;
}

impl<F> Signal for F
where
    F: Fn() -> Result<Value, NotReadable>,
{
    fn try_read(&self) -> Result<Value, NotReadable> {
        self()
    }
}

/// Anything a caller can hand to [`Console::log`](crate::Console::log)
#[derive(Clone)]
pub enum LogValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A structured value; only a placeholder is shown
    Object,
    /// A live value, read once when logged
    Live(Rc<dyn Signal>),
    /// No value at all
    Undefined,
    /// A value of a kind the console has no rendering for
    Unsupported,
}

impl LogValue {
    /// Wrap a closure as a live value
    pub fn live<F>(read: F) -> Self
    where
        F: Fn() -> Result<Value, NotReadable> + 'static,
    {
        Self::Live(Rc::new(read))
    }

    /// Text shown for the value, or None when the value is live and must be
    /// read first
    pub(crate) fn plain_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(Value::Number(*n).to_string()),
            Self::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl fmt::Debug for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Object => write!(f, "Object"),
            Self::Live(_) => write!(f, "Live(..)"),
            Self::Undefined => write!(f, "Undefined"),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for LogValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for LogValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::Text(s) => Self::Text(s),
            Value::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<Rc<dyn Signal>> for LogValue {
    fn from(signal: Rc<dyn Signal>) -> Self {
        Self::Live(signal)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-1.0).to_string(), "-1");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(LogValue::from("hi").plain_text().as_deref(), Some("hi"));
        assert_eq!(LogValue::from(42).plain_text().as_deref(), Some("42"));
        assert_eq!(LogValue::from(true).plain_text().as_deref(), Some("true"));
        assert!(LogValue::Object.plain_text().is_none());
        assert!(LogValue::live(|| Ok(Value::from(1.0))).plain_text().is_none());
    }

    #[test]
    fn test_none_is_undefined() {
        let value: LogValue = None::<&str>.into();
        assert!(matches!(value, LogValue::Undefined));
        let value: LogValue = Some("x").into();
        assert!(matches!(value, LogValue::Text(ref s) if s == "x"));
    }

    #[test]
    fn test_closure_signal() {
        let signal = || -> Result<Value, NotReadable> { Ok(Value::from("on")) };
        assert_eq!(signal.try_read(), Ok(Value::Text("on".to_string())));
        let broken = || -> Result<Value, NotReadable> { Err(NotReadable::new("gone")) };
        assert!(broken.try_read().is_err());
    }
}
