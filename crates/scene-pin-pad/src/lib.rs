//! Scene PIN Pad
//!
//! A phone-style key pad that accumulates typed characters up to a maximum
//! length. Key presses can trigger sound cues and a glow flash on the
//! pressed key; both are provided by the host.

mod easing;
mod pad;

pub use easing::Easing;
pub use pad::{GlowAnimator, GlowFlash, PinPad, PinPadError, SoundCue};
