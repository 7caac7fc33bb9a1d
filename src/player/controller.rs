//! The track player state machine.
//!
//! At most one track is ever marked as playing and at most one timer is ever
//! armed. Both are enforced when a control is activated: the previous track is
//! reset and its timer cancelled before anything new starts.

use tracing::{debug, trace};

use super::format;
use super::model::{ControlId, PlaybackState, PlayerState, PlayerTiming, TrackRef};
use super::surface::{PlayerEvent, PlayerSurface};
use super::ticker::{Ticker, TimerHandle};

pub struct TrackPlayerController {
    state: PlayerState,
    timing: PlayerTiming,
    controls: Vec<ControlId>,
}

impl TrackPlayerController {
    pub fn new(timing: PlayerTiming) -> Self {
        Self {
            state: PlayerState::default(),
            timing,
            controls: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn timing(&self) -> PlayerTiming {
        self.timing
    }

    /// Register every play control found on `surface`. Controls added later
    /// are not handled until the next `bind`.
    pub fn bind<S: PlayerSurface>(&mut self, surface: &S) {
        self.controls = surface.play_controls();
        debug!(controls = self.controls.len(), "bound play controls");
    }

    /// Dispatch one event.
    pub fn handle<S, T>(&mut self, event: PlayerEvent, surface: &mut S, ticker: &mut T)
    where
        S: PlayerSurface,
        T: Ticker,
    {
        match event {
            PlayerEvent::ControlActivated(control) => {
                self.on_track_control_activated(control, surface, ticker)
            }
            PlayerEvent::Tick(handle) => self.on_tick(handle, surface, ticker),
        }
    }

    /// React to a click on a track's play/pause control.
    pub fn on_track_control_activated<S, T>(
        &mut self,
        control: ControlId,
        surface: &mut S,
        ticker: &mut T,
    ) where
        S: PlayerSurface,
        T: Ticker,
    {
        if !self.controls.contains(&control) {
            debug!(?control, "activation on an unbound control ignored");
            return;
        }
        let Some(track) = surface.track_region(control) else {
            debug!(?control, "control has no enclosing track region");
            return;
        };

        if let Some(previous) = self.state.active.filter(|&prev| prev != track) {
            self.deactivate(previous, surface, ticker);
        }

        if surface.control_is_playing(control) {
            self.pause_track(track, surface, ticker);
        } else {
            self.play_track(track, surface, ticker);
        }
    }

    /// Start simulated playback of `track` from the beginning.
    pub fn play_track<S, T>(&mut self, track: TrackRef, surface: &mut S, ticker: &mut T)
    where
        S: PlayerSurface,
        T: Ticker,
    {
        self.cancel_timer(ticker);

        surface.set_track_playing(track, true);
        self.state.active = Some(track);
        self.state.playback = PlaybackState::Playing;
        self.state.progress.reset();
        self.state.timer = Some(ticker.arm(self.timing.tick));

        debug!(?track, timer = ?self.state.timer, "playing");
    }

    /// Stop simulated playback of `track`. The timer is cancelled right away,
    /// so no tick lands after a pause.
    pub fn pause_track<S, T>(&mut self, track: TrackRef, surface: &mut S, ticker: &mut T)
    where
        S: PlayerSurface,
        T: Ticker,
    {
        surface.set_track_playing(track, false);
        self.state.playback = PlaybackState::Idle;
        self.state.progress.reset();
        self.cancel_timer(ticker);

        debug!(?track, "paused");
    }

    /// Advance the progress simulation by one step.
    pub fn on_tick<S, T>(&mut self, handle: TimerHandle, surface: &mut S, ticker: &mut T)
    where
        S: PlayerSurface,
        T: Ticker,
    {
        if self.state.timer != Some(handle) {
            trace!(?handle, "tick from a stale timer");
            ticker.cancel(handle);
            return;
        }
        if self.state.playback != PlaybackState::Playing {
            self.cancel_timer(ticker);
            return;
        }

        if self.state.progress.advance() {
            debug!("end of simulated track");
            if let Some(track) = self.state.active {
                self.pause_track(track, surface, ticker);
            }
        }

        self.render_progress(surface);
    }

    /// Disarm the timer, if any. Called on shutdown.
    pub fn shutdown<T: Ticker>(&mut self, ticker: &mut T) {
        self.cancel_timer(ticker);
    }

    fn deactivate<S, T>(&mut self, track: TrackRef, surface: &mut S, ticker: &mut T)
    where
        S: PlayerSurface,
        T: Ticker,
    {
        self.cancel_timer(ticker);
        surface.set_track_playing(track, false);
        debug!(?track, "previous track reset");
    }

    fn cancel_timer<T: Ticker>(&mut self, ticker: &mut T) {
        if let Some(handle) = self.state.timer.take() {
            ticker.cancel(handle);
        }
    }

    fn render_progress<S: PlayerSurface>(&self, surface: &mut S) {
        let progress = self.state.progress;
        surface.set_progress_width(progress.value());
        surface.set_time_label(&format::time_label(progress, self.timing.total));
    }
}
