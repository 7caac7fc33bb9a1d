//! Simulated track player.
//!
//! There is no audio here: playing a track swaps its control to a pause icon
//! and runs a timer that walks a progress value from 0 to 100 over the
//! configured track length.

mod controller;
mod format;
mod model;
mod surface;
mod ticker;

pub use controller::TrackPlayerController;
pub use format::{elapsed_secs, format_clock, time_label};
pub use model::*;
pub use surface::{PlayerEvent, PlayerSurface};
pub use ticker::{IntervalTicker, Ticker, TimerHandle};
