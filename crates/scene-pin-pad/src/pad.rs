//! PIN pad state

use crate::easing::Easing;
use std::time::Duration;
use thiserror::Error;

/// A sound the host can play
pub trait SoundCue {
    fn play(&self);
}

/// Drives the glow overlay of a key; the host owns the animation engine
pub trait GlowAnimator {
    fn flash(&mut self, key: &str, flash: GlowFlash);
}

/// Opacity animation applied to a key's glow when it is pressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFlash {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for GlowFlash {
    fn default() -> Self {
        Self {
            from: 1.0,
            to: 0.0,
            duration: Duration::from_millis(150),
            easing: Easing::EaseOutCubic,
        }
    }
}

impl GlowFlash {
    /// Opacity at `elapsed` since the flash started
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.interpolate(self.from, self.to, t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PinPadError {
    #[error("pin already has {max} characters")]
    Full { max: usize },

    #[error("pad has no text field")]
    NoTextField,
}

/// Key pad accumulating a PIN
///
/// A pad built without a maximum length has no text field: it still flashes
/// keys but does not record input.
#[derive(Debug, Clone, Default)]
pub struct PinPad {
    max_length: Option<usize>,
    entered: String,
}

impl PinPad {
    pub fn new(max_length: Option<usize>) -> Self {
        Self {
            max_length,
            entered: String::new(),
        }
    }

    /// Append `value`, playing `ok` on success and `wrong` when the pad is full
    pub fn add(
        &mut self,
        value: &str,
        ok: Option<&dyn SoundCue>,
        wrong: Option<&dyn SoundCue>,
    ) -> Result<&str, PinPadError> {
        let max = self.max_length.ok_or(PinPadError::NoTextField)?;

        if self.entered.chars().count() >= max {
            if let Some(cue) = wrong {
                cue.play();
            }
            log::debug!("PIN pad full, rejected {:?}", value);
            return Err(PinPadError::Full { max });
        }

        if let Some(cue) = ok {
            cue.play();
        }
        self.entered.push_str(value);
        Ok(&self.entered)
    }

    /// Flash `key` and drop the last character, if any
    pub fn remove_last(
        &mut self,
        key: &str,
        glow: &mut dyn GlowAnimator,
        sound: Option<&dyn SoundCue>,
    ) -> Option<char> {
        glow.flash(key, GlowFlash::default());

        let removed = self.entered.pop();
        if removed.is_some() {
            if let Some(cue) = sound {
                cue.play();
            }
        }
        removed
    }

    /// Flash `key` and drop everything typed so far
    ///
    /// Returns false if there was nothing to remove.
    pub fn remove_all(
        &mut self,
        key: &str,
        glow: &mut dyn GlowAnimator,
        sound: Option<&dyn SoundCue>,
    ) -> bool {
        glow.flash(key, GlowFlash::default());

        if self.entered.is_empty() {
            return false;
        }
        if let Some(cue) = sound {
            cue.play();
        }
        self.entered.clear();
        true
    }

    pub fn entered(&self) -> &str {
        &self.entered
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn has_text_field(&self) -> bool {
        self.max_length.is_some()
    }

    /// True once the PIN reached its maximum length
    pub fn is_complete(&self) -> bool {
        self.max_length
            .is_some_and(|max| self.entered.chars().count() >= max)
    }

    /// Compare the entered PIN against `secret`
    pub fn matches(&self, secret: &str) -> bool {
        self.has_text_field() && self.entered == secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingCue(Cell<usize>);

    impl SoundCue for CountingCue {
        fn play(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingGlow(Vec<String>);

    impl GlowAnimator for RecordingGlow {
        fn flash(&mut self, key: &str, _flash: GlowFlash) {
            self.0.push(key.to_string());
        }
    }

    #[test]
    fn test_add_until_full() {
        let ok = CountingCue::default();
        let wrong = CountingCue::default();
        let mut pad = PinPad::new(Some(4));

        for digit in ["1", "2", "3", "4"] {
            pad.add(digit, Some(&ok), Some(&wrong)).unwrap();
        }
        assert!(pad.is_complete());
        assert_eq!(pad.entered(), "1234");

        assert_eq!(
            pad.add("5", Some(&ok), Some(&wrong)),
            Err(PinPadError::Full { max: 4 })
        );
        assert_eq!(pad.entered(), "1234");
        assert_eq!(ok.0.get(), 4);
        assert_eq!(wrong.0.get(), 1);
    }

    #[test]
    fn test_pad_without_text_field() {
        let mut pad = PinPad::new(None);
        assert_eq!(pad.add("1", None, None), Err(PinPadError::NoTextField));
        assert!(!pad.is_complete());
        assert!(!pad.matches(""));
    }

    #[test]
    fn test_remove_last_flashes_key() {
        let mut glow = RecordingGlow::default();
        let cue = CountingCue::default();
        let mut pad = PinPad::new(Some(4));
        pad.add("7", None, None).unwrap();
        pad.add("8", None, None).unwrap();

        assert_eq!(pad.remove_last("back", &mut glow, Some(&cue)), Some('8'));
        assert_eq!(pad.entered(), "7");
        assert_eq!(pad.remove_last("back", &mut glow, Some(&cue)), Some('7'));
        assert_eq!(pad.remove_last("back", &mut glow, Some(&cue)), None);

        assert_eq!(glow.0, vec!["back", "back", "back"]);
        assert_eq!(cue.0.get(), 2);
    }

    #[test]
    fn test_remove_all() {
        let mut glow = RecordingGlow::default();
        let mut pad = PinPad::new(Some(4));
        pad.add("1", None, None).unwrap();
        pad.add("2", None, None).unwrap();

        assert!(pad.remove_all("clear", &mut glow, None));
        assert_eq!(pad.entered(), "");
        assert!(!pad.remove_all("clear", &mut glow, None));
        assert_eq!(glow.0.len(), 2);
    }

    #[test]
    fn test_matches_secret() {
        let mut pad = PinPad::new(Some(4));
        for digit in ["4", "2", "4", "2"] {
            pad.add(digit, None, None).unwrap();
        }
        assert!(pad.matches("4242"));
        assert!(!pad.matches("1234"));
    }

    #[test]
    fn test_glow_flash_fades() {
        let flash = GlowFlash::default();
        assert_eq!(flash.opacity_at(Duration::ZERO), 1.0);
        assert_eq!(flash.opacity_at(Duration::from_millis(150)), 0.0);
        assert!(flash.opacity_at(Duration::from_millis(75)) < 0.5);
        assert!(flash.is_finished(Duration::from_millis(150)));
        assert!(!flash.is_finished(Duration::from_millis(149)));
    }
}
