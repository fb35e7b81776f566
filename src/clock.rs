use std::thread;
use std::time::{Duration, Instant};

/// Paces the main loop to a fixed frame rate
#[derive(Debug)]
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Sleeps until one frame has passed since the previous tick and
    /// returns the real time elapsed.
    pub fn tick(&mut self) -> Duration {
        let deadline = self.last_tick + self.frame_time;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
