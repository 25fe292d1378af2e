//! Frame rate limiting

use std::time::{Duration, Instant};

/// Paces the frame loop
pub trait FrameClock {
    /// Wait until 1/`max_fps` seconds have passed since the previous call
    /// began, and return the time elapsed since then.
    fn tick(&mut self, max_fps: u32) -> Duration;
}

/// Wall-clock pacing with `std::thread::sleep`
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tick budget for a frame cap
pub fn frame_budget(max_fps: u32) -> Duration {
    Duration::from_secs(1) / max_fps.max(1)
}

impl FrameClock for SystemClock {
    fn tick(&mut self, max_fps: u32) -> Duration {
        let now = Instant::now();
        let Some(last) = self.last else {
            self.last = Some(now);
            return Duration::ZERO;
        };

        let budget = frame_budget(max_fps);
        let elapsed = now.duration_since(last);
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last)
    }
}
