//! Demo application state
//!
//! Owns the console, the PIN pad and the host-side bits they talk to: the
//! text surface, sound cues and the key glow.

use crate::keymap::{
    Input, CLEAR_BUTTON, SCROLL_DOWN_BUTTON, SCROLL_TO_BOTTOM_BUTTON, SCROLL_UP_BUTTON,
    TO_TOP_BUTTON,
};
use scene_console::{
    Console, ConsoleError, ConsoleOptions, LogValue, Scheduler, SharedText, TimerEvent, Value,
};
use scene_pin_pad::{GlowAnimator, GlowFlash, PinPad, SoundCue};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

const PIN_LENGTH: usize = 4;
const SECRET_PIN: &str = "1234";
const FONT_SIZE: u16 = 16;

/// "Plays" a cue by showing it in the status line
struct StatusCue {
    status: Rc<RefCell<String>>,
    message: &'static str,
}

impl SoundCue for StatusCue {
    fn play(&self) {
        log::debug!("cue: {}", self.message);
        *self.status.borrow_mut() = self.message.to_string();
    }
}

/// Glow of the most recently flashed key
#[derive(Debug, Default)]
pub struct KeyGlow {
    active: Option<(String, Instant, GlowFlash)>,
}

impl KeyGlow {
    /// Current glow opacity, 0.0 when nothing is flashing
    pub fn opacity(&self) -> f32 {
        match &self.active {
            Some((_, started, flash)) if !flash.is_finished(started.elapsed()) => {
                flash.opacity_at(started.elapsed())
            }
            _ => 0.0,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.active.as_ref().map(|(key, _, _)| key.as_str())
    }
}

impl GlowAnimator for KeyGlow {
    fn flash(&mut self, key: &str, flash: GlowFlash) {
        self.active = Some((key.to_string(), Instant::now(), flash));
    }
}

pub struct App {
    pub console: Console,
    pub surface: SharedText,
    pub pin_pad: PinPad,
    pub glow: KeyGlow,
    pub status: Rc<RefCell<String>>,
    pub running: bool,
    frames: Rc<Cell<u64>>,
    pin_length: Rc<Cell<usize>>,
    ok_cue: StatusCue,
    wrong_cue: StatusCue,
    erase_cue: StatusCue,
    samples_logged: usize,
}

impl App {
    pub fn new(
        options: ConsoleOptions,
        scheduler: impl Scheduler + 'static,
    ) -> Result<Self, ConsoleError> {
        let surface = SharedText::with_placeholder("console starting...");
        let mut console = Console::new(surface.clone(), scheduler, FONT_SIZE, options)?;

        console
            .add_clear_button(CLEAR_BUTTON)
            .add_to_top_button(TO_TOP_BUTTON)
            .add_scroll_up_button(SCROLL_UP_BUTTON)
            .add_scroll_down_button(SCROLL_DOWN_BUTTON)
            .add_scroll_to_bottom_button(SCROLL_TO_BOTTOM_BUTTON);

        let frames = Rc::new(Cell::new(0u64));
        let pin_length = Rc::new(Cell::new(0usize));
        let started = Instant::now();

        let frame_reader = Rc::clone(&frames);
        console.watch(
            "frame",
            LogValue::live(move || Ok(Value::from(frame_reader.get()))),
        );
        console.watch(
            "uptime",
            LogValue::live(move || {
                Ok(Value::from(format!("{:.1}s", started.elapsed().as_secs_f32())))
            }),
        );
        let length_reader = Rc::clone(&pin_length);
        console.watch(
            "pin",
            LogValue::live(move || Ok(Value::from(length_reader.get() as u64))),
        );

        let status = Rc::new(RefCell::new(String::new()));
        let cue = |message: &'static str| StatusCue {
            status: Rc::clone(&status),
            message,
        };
        let ok_cue = cue("beep");
        let wrong_cue = cue("buzz");
        let erase_cue = cue("click");

        Ok(Self {
            console,
            surface,
            pin_pad: PinPad::new(Some(PIN_LENGTH)),
            glow: KeyGlow::default(),
            status,
            running: true,
            frames,
            pin_length,
            ok_cue,
            wrong_cue,
            erase_cue,
            samples_logged: 0,
        })
    }

    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Tap(button) => {
                if !self.console.tap(button) {
                    log::warn!("Tap on unbound button {}", button);
                }
            }
            Input::Digit(digit) => self.add_digit(digit),
            Input::RemoveLast => {
                self.pin_pad
                    .remove_last("backspace", &mut self.glow, Some(&self.erase_cue));
                self.pin_length.set(self.pin_pad.entered().len());
            }
            Input::RemoveAll => {
                self.pin_pad
                    .remove_all("delete", &mut self.glow, Some(&self.erase_cue));
                self.pin_length.set(0);
            }
            Input::LogSample => self.log_sample(),
            Input::Pinch => self.console.pinch(1.25),
            Input::Quit => self.running = false,
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) {
        self.console.on_timer(event);
    }

    /// Called once per drawn frame
    pub fn on_frame(&mut self) {
        self.frames.set(self.frames.get() + 1);
    }

    fn add_digit(&mut self, digit: char) {
        let value = digit.to_string();
        match self
            .pin_pad
            .add(&value, Some(&self.ok_cue), Some(&self.wrong_cue))
        {
            Ok(entered) => {
                self.pin_length.set(entered.len());
            }
            Err(e) => {
                self.console.log(e.to_string());
                return;
            }
        }

        if self.pin_pad.is_complete() {
            if self.pin_pad.matches(SECRET_PIN) {
                log::info!("PIN accepted");
                self.console.log("PIN accepted");
            } else {
                self.console.log("PIN rejected");
            }
        }
    }

    /// Log one of a rotating set of values, to show how each kind renders
    fn log_sample(&mut self) {
        let frames = Rc::clone(&self.frames);
        let sample: LogValue = match self.samples_logged % 5 {
            0 => "hello from the demo".into(),
            1 => 42.into(),
            2 => LogValue::Object,
            3 => None::<&str>.into(),
            _ => LogValue::live(move || Ok(Value::from(frames.get()))),
        };
        self.samples_logged += 1;
        self.console.log(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_console::{ConsoleState, FrameScheduler};
    use std::time::Duration;

    fn refresh(app: &mut App, scheduler: &FrameScheduler) {
        for event in scheduler.advance(Duration::from_millis(100)) {
            app.on_timer(event);
        }
    }

    fn app() -> (App, FrameScheduler) {
        let scheduler = FrameScheduler::new();
        let options = ConsoleOptions {
            echo_commands: false,
            ..ConsoleOptions::default()
        };
        (App::new(options, scheduler.clone()).unwrap(), scheduler)
    }

    #[test]
    fn test_starts_watching_signals() {
        let (app, scheduler) = app();
        assert_eq!(app.console.state(), ConsoleState::Watching);
        assert_eq!(scheduler.active_recurring(), 1);
        assert!(app.surface.text().contains("<O>    frame:0"));
    }

    #[test]
    fn test_frame_signal_refreshes() {
        let (mut app, scheduler) = app();
        app.on_frame();
        app.on_frame();
        refresh(&mut app, &scheduler);
        assert!(app.surface.text().contains("<O>    frame:2"));
    }

    #[test]
    fn test_correct_pin_is_accepted() {
        let (mut app, _) = app();
        for digit in ['1', '2', '3', '4'] {
            app.handle(Input::Digit(digit));
        }
        assert!(app.surface.text().starts_with(">>>    PIN accepted"));
        assert_eq!(app.status.borrow().as_str(), "beep");

        app.handle(Input::Digit('5'));
        assert_eq!(app.status.borrow().as_str(), "buzz");
        assert_eq!(app.pin_pad.entered(), "1234");
    }

    #[test]
    fn test_backspace_flashes_and_erases() {
        let (mut app, scheduler) = app();
        app.handle(Input::Digit('9'));
        refresh(&mut app, &scheduler);
        assert!(app.surface.text().contains("<O>    pin:1"));

        app.handle(Input::RemoveLast);
        refresh(&mut app, &scheduler);
        assert_eq!(app.pin_pad.entered(), "");
        assert_eq!(app.glow.key(), Some("backspace"));
        assert!(app.surface.text().contains("<O>    pin:0"));
    }

    #[test]
    fn test_clear_button_stops_watching() {
        let (mut app, scheduler) = app();
        app.handle(Input::Tap(CLEAR_BUTTON));
        assert!(app.console.is_empty());
        assert_eq!(app.console.state(), ConsoleState::Idle);
        assert_eq!(scheduler.active_recurring(), 0);
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app();
        app.handle(Input::Quit);
        assert!(!app.running);
    }
}
