//! Player state types: track/control handles, playback state and progress.

use std::time::Duration;

use crate::config::PlayerSettings;

use super::ticker::TimerHandle;

/// Handle to one track region on the page (a card or the featured player).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackRef(pub usize);

/// Handle to a play/pause control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(pub usize);

/// Whether the simulated playback is running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// Simulated elapsed fraction of the track, always within `0..=100`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// Build a progress value, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Advance by one step. Returns `true` when the step ran past the end, in
    /// which case the value has wrapped back to 0.
    pub fn advance(&mut self) -> bool {
        if self.0 >= Self::MAX {
            self.0 = 0;
            true
        } else {
            self.0 += 1;
            false
        }
    }
}

/// Duration of the fictitious track and the timer period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayerTiming {
    pub total: Duration,
    pub tick: Duration,
}

impl Default for PlayerTiming {
    fn default() -> Self {
        Self::from(&PlayerSettings::default())
    }
}

impl From<&PlayerSettings> for PlayerTiming {
    fn from(settings: &PlayerSettings) -> Self {
        Self {
            total: Duration::from_secs(settings.total_duration_secs),
            tick: Duration::from_millis(settings.tick_ms.max(1)),
        }
    }
}

/// Everything the controller owns between events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub playback: PlaybackState,
    /// Last activated track. Stays set (but stale) once playback is idle.
    pub active: Option<TrackRef>,
    pub progress: Progress,
    pub timer: Option<TimerHandle>,
}

impl PlayerState {
    /// The track that is currently playing, if any.
    pub fn playing_track(&self) -> Option<TrackRef> {
        match self.playback {
            PlaybackState::Playing => self.active,
            PlaybackState::Idle => None,
        }
    }
}
