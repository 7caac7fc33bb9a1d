use crate::config::ScrollBehaviorSetting;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl From<ScrollBehaviorSetting> for ScrollBehavior {
    fn from(s: ScrollBehaviorSetting) -> Self {
        match s {
            ScrollBehaviorSetting::Smooth => Self::Smooth,
            ScrollBehaviorSetting::Instant => Self::Instant,
        }
    }
}

/// An in-flight eased scroll from one row offset to another.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    from: u16,
    to: u16,
    frames: u16,
    frame: u16,
}

impl SmoothScroll {
    pub fn new(from: u16, to: u16, frames: u16) -> Self {
        Self {
            from,
            to,
            frames: frames.max(1),
            frame: 0,
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Offset for the next frame, or `None` once the target was reached.
    /// The last frame always lands exactly on the target.
    pub fn step(&mut self) -> Option<u16> {
        if self.is_done() {
            return None;
        }
        self.frame += 1;
        if self.is_done() {
            return Some(self.to);
        }

        // ease-out quadratic
        let t = f32::from(self.frame) / f32::from(self.frames);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        let delta = f32::from(self.to) - f32::from(self.from);
        let pos = f32::from(self.from) + delta * eased;
        Some(pos.round().clamp(0.0, f32::from(u16::MAX)) as u16)
    }
}
