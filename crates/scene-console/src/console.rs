//! Console buffer and renderer
//!
//! Owns the entries, applies the eviction and collapse rules, computes the
//! visible window and writes it to the surface after every change.

use crate::command::ConsoleCommand;
use crate::entry::{display_text, Entry};
use crate::error::ConsoleError;
use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};
use crate::surface::TextSurface;
use crate::value::LogValue;
use scene_console_config::ConsoleOptions;
use std::collections::{HashMap, VecDeque};

/// Whether the console is re-rendering on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    /// No signal watched, no refresh timer
    Idle,
    /// At least one signal watched, refresh timer armed
    Watching,
}

/// On-screen debug console
pub struct Console {
    options: ConsoleOptions,
    surface: Box<dyn TextSurface>,
    scheduler: Box<dyn Scheduler>,
    entries: VecDeque<Entry>,
    /// None = pinned to the newest lines
    scroll_offset: Option<usize>,
    font_size: u16,
    refresh_timer: Option<TimerHandle>,
    buttons: HashMap<String, ConsoleCommand>,
}

impl Console {
    /// Create a console writing to `surface`
    ///
    /// The surface keeps whatever placeholder text it has until the first
    /// render, or until the placeholder delay elapses.
    pub fn new(
        surface: impl TextSurface + 'static,
        scheduler: impl Scheduler + 'static,
        font_size: u16,
        options: ConsoleOptions,
    ) -> Result<Self, ConsoleError> {
        options.validate()?;

        if options.debug {
            log::debug!("[console] size:{} options:{:?}", font_size, options);
        }

        let mut console = Self {
            surface: Box::new(surface),
            scheduler: Box::new(scheduler),
            entries: VecDeque::new(),
            scroll_offset: None,
            font_size,
            refresh_timer: None,
            buttons: HashMap::new(),
            options,
        };

        console.surface.set_font_size(font_size);
        console
            .scheduler
            .schedule_once(console.options.placeholder_delay(), TimerEvent::ClearPlaceholder);

        Ok(console)
    }

    /// Append a value as a log line
    ///
    /// With collapsing enabled, a plain value whose text matches any earlier
    /// line bumps that line's counter instead; the line keeps its position.
    pub fn log(&mut self, value: impl Into<LogValue>) {
        let value = value.into();
        let text = display_text(&value);

        if self.options.debug {
            log::debug!("[console] log {:?} -> {:?}", value, text);
        }

        if self.options.collapse && value.plain_text().is_some() {
            let existing = self.entries.iter_mut().find_map(|entry| match entry {
                Entry::Log { text: t, count } if *t == text => Some(count),
                _ => None,
            });
            if let Some(count) = existing {
                *count += 1;
                self.render();
                return;
            }
        }

        self.entries.push_back(Entry::log(text));
        self.render();
    }

    /// Watch a live value under `label`
    ///
    /// The value is re-read on every render. Anything that is not a readable
    /// live value is logged as `<label>: [not a signal]` instead.
    pub fn watch(&mut self, label: impl Into<String>, source: impl Into<LogValue>) {
        let label = label.into();

        let signal = match source.into() {
            LogValue::Live(signal) => match signal.try_read() {
                Ok(_) => Some(signal),
                Err(e) => {
                    log::debug!("[console] cannot watch {}: {}", label, e);
                    None
                }
            },
            other => {
                log::debug!("[console] cannot watch {}: {:?} is not live", label, other);
                None
            }
        };

        match signal {
            Some(source) => {
                if self.options.debug {
                    log::debug!("[console] watch {}", label);
                }
                self.entries.push_back(Entry::Signal { label, source });
                self.render();
                self.start_refresh_timer();
            }
            None => {
                self.entries
                    .push_back(Entry::log(format!("{}: {}", label, crate::NOT_A_SIGNAL)));
                self.render();
            }
        }
    }

    /// Run a command by value
    pub fn execute(&mut self, command: ConsoleCommand) {
        match command {
            ConsoleCommand::Clear => self.clear(),
            ConsoleCommand::ScrollToTop => self.scroll_to_top(),
            ConsoleCommand::ScrollUp => self.scroll_up(),
            ConsoleCommand::ScrollDown => self.scroll_down(),
            ConsoleCommand::ScrollToBottom => self.scroll_to_bottom(),
        }
    }

    /// Empty the log and pin the window to the bottom
    ///
    /// With command echo on, the `Clear()` line stays visible for the
    /// feedback duration before the empty log is drawn.
    pub fn clear(&mut self) {
        self.echo(ConsoleCommand::Clear);
        self.entries.clear();
        self.scroll_offset = None;

        if self.options.echo_commands {
            self.scheduler
                .schedule_once(self.options.feedback_duration(), TimerEvent::ClearFeedback);
            self.stop_refresh_timer_if_idle();
        } else {
            self.render();
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.echo(ConsoleCommand::ScrollToTop);
        self.scroll_offset = Some(0);
        self.render();
    }

    /// Move one line towards older entries, unpinning if needed
    pub fn scroll_up(&mut self) {
        self.echo(ConsoleCommand::ScrollUp);
        self.scroll_offset = Some(match self.scroll_offset {
            Some(offset) => offset.saturating_sub(1),
            None => self.entries.len().saturating_sub(self.options.max_lines + 1),
        });
        self.render();
    }

    /// Move one line towards newer entries, pinning once past the end
    pub fn scroll_down(&mut self) {
        self.echo(ConsoleCommand::ScrollDown);
        let len = self.entries.len();
        self.scroll_offset = match self.scroll_offset {
            Some(offset) if offset + 1 + self.options.max_lines <= len => Some(offset + 1),
            _ => None,
        };
        self.render();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.echo(ConsoleCommand::ScrollToBottom);
        self.scroll_offset = None;
        self.render();
    }

    /// Grow the font by one step in response to a pinch gesture
    ///
    /// Ignored unless `resize_text` is enabled.
    pub fn pinch(&mut self, scale: f32) {
        if !self.options.resize_text {
            return;
        }
        self.font_size = self.font_size.saturating_add(1);
        self.surface.set_font_size(self.font_size);
        self.log(format!("Pinch scale:{} fontSize:{}", scale, self.font_size));
    }

    /// Handle a timer the host scheduled on our behalf
    pub fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ClearPlaceholder | TimerEvent::ClearFeedback => self.render(),
            // Ticks already in flight when the timer was cancelled are dropped
            TimerEvent::Refresh if self.refresh_timer.is_some() => self.render(),
            TimerEvent::Refresh => {}
        }
    }

    /// Bind a button to a command; taps on it are delivered through [`tap`](Self::tap)
    pub fn bind_button(&mut self, button: impl Into<String>, command: ConsoleCommand) -> &mut Self {
        let button = button.into();
        log::debug!("[console] button {} -> {:?}", button, command);
        self.buttons.insert(button, command);
        self
    }

    pub fn add_clear_button(&mut self, button: impl Into<String>) -> &mut Self {
        self.bind_button(button, ConsoleCommand::Clear)
    }

    pub fn add_to_top_button(&mut self, button: impl Into<String>) -> &mut Self {
        self.bind_button(button, ConsoleCommand::ScrollToTop)
    }

    pub fn add_scroll_up_button(&mut self, button: impl Into<String>) -> &mut Self {
        self.bind_button(button, ConsoleCommand::ScrollUp)
    }

    pub fn add_scroll_down_button(&mut self, button: impl Into<String>) -> &mut Self {
        self.bind_button(button, ConsoleCommand::ScrollDown)
    }

    pub fn add_scroll_to_bottom_button(&mut self, button: impl Into<String>) -> &mut Self {
        self.bind_button(button, ConsoleCommand::ScrollToBottom)
    }

    /// Deliver a tap on `button`
    ///
    /// Returns false if the button is not bound.
    pub fn tap(&mut self, button: &str) -> bool {
        match self.buttons.get(button).copied() {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Recompute the visible window and write it to the surface
    pub fn render(&mut self) {
        let max_lines = self.options.max_lines;

        if !self.options.keep_log {
            while self.entries.len() > max_lines {
                self.entries.pop_front();
            }
        }

        let len = self.entries.len();
        let visible = len.min(max_lines);
        let base_start = if self.options.keep_log {
            len.saturating_sub(max_lines)
        } else {
            0
        };
        let start = self.scroll_offset.unwrap_or(base_start).min(len - visible);

        // Newest visible line first
        let text: String = self
            .entries
            .range(start..start + visible)
            .rev()
            .map(Entry::format_line)
            .collect();
        self.surface.set_text(&text);

        self.stop_refresh_timer_if_idle();
    }

    pub fn state(&self) -> ConsoleState {
        if self.refresh_timer.is_some() {
            ConsoleState::Watching
        } else {
            ConsoleState::Idle
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Window start chosen by scrolling, None when pinned to the bottom
    pub fn scroll_offset(&self) -> Option<usize> {
        self.scroll_offset
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    fn echo(&mut self, command: ConsoleCommand) {
        if self.options.echo_commands {
            self.log(command.feedback());
        }
    }

    fn start_refresh_timer(&mut self) {
        if self.refresh_timer.is_none() {
            let handle = self
                .scheduler
                .schedule_recurring(self.options.refresh_interval(), TimerEvent::Refresh);
            log::debug!(
                "[console] watching, refresh every {:?}",
                self.options.refresh_interval()
            );
            self.refresh_timer = Some(handle);
        }
    }

    fn stop_refresh_timer_if_idle(&mut self) {
        if self.entries.iter().any(Entry::is_signal) {
            return;
        }
        if let Some(handle) = self.refresh_timer.take() {
            self.scheduler.cancel(handle);
            log::debug!("[console] no signals left, refresh stopped");
        }
    }
}
