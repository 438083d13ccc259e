//! Scene Console
//!
//! A bounded, scrollable debug console for scenes that have a text element but
//! no terminal. The console keeps an ordered list of log lines and live
//! signal bindings, collapses repeated lines, and renders a fixed-size window
//! of them as one string which it hands to the host's text surface.
//!
//! Rendering pixels, gestures and timing belong to the host; the console only
//! talks to it through [`TextSurface`] and [`Scheduler`].
//!
//! # Example
//!
//! ```
//! use scene_console::{Console, ConsoleOptions, FrameScheduler, SharedText};
//!
//! let surface = SharedText::new();
//! let scheduler = FrameScheduler::new();
//! let mut console = Console::new(
//!     surface.clone(),
//!     scheduler.clone(),
//!     16,
//!     ConsoleOptions::default(),
//! )?;
//!
//! console.log("ready");
//! console.log(3);
//! assert_eq!(surface.text(), ">>>    3\n>>>    ready\n");
//! # Ok::<(), scene_console::ConsoleError>(())
//! ```

mod command;
mod console;
mod entry;
mod error;
mod scheduler;
mod surface;
mod value;

pub use command::ConsoleCommand;
pub use console::{Console, ConsoleState};
pub use entry::{Entry, NOT_A_SIGNAL};
pub use error::ConsoleError;
pub use scene_console_config::ConsoleOptions;
pub use scheduler::{FrameScheduler, Scheduler, TimerEvent, TimerHandle};
pub use surface::{SharedText, TextSurface};
pub use value::{LogValue, NotReadable, Signal, Value};
