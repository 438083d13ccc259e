//! Display surface the console writes its rendered text to

use std::cell::RefCell;
use std::rc::Rc;

/// A mutable text element owned by the host
///
/// Every render replaces the whole content; the console never appends.
pub trait TextSurface {
    fn set_text(&mut self, text: &str);

    fn set_font_size(&mut self, _size: u16) {}
}

#[derive(Debug, Default)]
struct SharedTextInner {
    text: String,
    font_size: u16,
    writes: usize,
}

/// A text surface that can be handed to the console while the host keeps a
/// handle to read it back
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    inner: Rc<RefCell<SharedTextInner>>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface pre-filled with text the host shows until the first render
    pub fn with_placeholder(text: impl Into<String>) -> Self {
        let surface = Self::default();
        surface.inner.borrow_mut().text = text.into();
        surface
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn font_size(&self) -> u16 {
        self.inner.borrow().font_size
    }

    /// Number of `set_text` calls so far
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl TextSurface for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.text.clear();
        inner.text.push_str(text);
        inner.writes += 1;
    }

    fn set_font_size(&mut self, size: u16) {
        self.inner.borrow_mut().font_size = size;
    }
}
