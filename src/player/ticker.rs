//! Periodic timers for the progress simulation.
//!
//! The controller never sleeps or spawns anything itself: it asks a `Ticker`
//! to arm or cancel a timer and is handed `TimerHandle`s back through
//! `PlayerEvent::Tick` by whoever drives the clock.

use std::time::{Duration, Instant};

/// Identifies one armed periodic timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

pub trait Ticker {
    /// Arm a periodic timer firing every `period`.
    fn arm(&mut self, period: Duration) -> TimerHandle;
    /// Disarm `handle`. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug)]
struct Armed {
    handle: TimerHandle,
    period: Duration,
    next_due: Instant,
}

/// Wall-clock ticker polled by the event loop.
#[derive(Debug, Default)]
pub struct IntervalTicker {
    next_id: u64,
    armed: Vec<Armed>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer whose first tick is due one `period` after `now`.
    pub fn arm_at(&mut self, now: Instant, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.push(Armed {
            handle,
            period,
            next_due: now + period,
        });
        handle
    }

    /// Return one timer that is due at `now`, rescheduling it for its next period.
    ///
    /// Call repeatedly until it yields `None`. A timer that fell more than one
    /// period behind fires once and is rescheduled relative to `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        let armed = self.armed.iter_mut().find(|a| a.next_due <= now)?;
        armed.next_due += armed.period;
        if armed.next_due <= now {
            armed.next_due = now + armed.period;
        }
        Some(armed.handle)
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self, period: Duration) -> TimerHandle {
        self.arm_at(Instant::now(), period)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|a| a.handle != handle);
    }
}
