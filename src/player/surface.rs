use super::model::{ControlId, TrackRef};
use super::ticker::TimerHandle;

/// What the controller needs from the page it drives.
///
/// Every setter is a no-op when the element it targets does not exist; a page
/// without a featured player has no progress bar and no time label.
pub trait PlayerSurface {
    /// All play/pause controls currently on the page.
    fn play_controls(&self) -> Vec<ControlId>;
    /// The track region enclosing `control`.
    fn track_region(&self, control: ControlId) -> Option<TrackRef>;
    /// Whether `control` is currently marked as playing.
    fn control_is_playing(&self, control: ControlId) -> bool;
    /// Swap the track's icon and toggle its "playing" mark.
    fn set_track_playing(&mut self, track: TrackRef, playing: bool);
    /// Set the progress bar width, in percent.
    fn set_progress_width(&mut self, percent: u8);
    fn set_time_label(&mut self, text: &str);
}

/// Events the controller reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The user clicked a play/pause control.
    ControlActivated(ControlId),
    /// An armed timer fired.
    Tick(TimerHandle),
}
