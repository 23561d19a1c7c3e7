// Turns host timestamps into frame deltas, holding frames back to the
// target rate and stopping once the host asks to close

// requestAnimationFrame timestamps jitter around the display interval
const JITTER_MS: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    pub min_interval_ms: f64,
    last_ms: Option<f64>,
    closed: bool,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            min_interval_ms: 1000.0 / f64::from(target_fps.max(1)),
            last_ms: None,
            closed: false,
        }
    }

    /// Seconds since the last accepted frame, or `None` if this timestamp
    /// comes too early or the clock is closed.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        if self.closed {
            return None;
        }
        let last_ms = match self.last_ms {
            Some(last_ms) => last_ms,
            None => {
                self.last_ms = Some(now_ms);
                return Some(0.0);
            }
        };

        let elapsed_ms = now_ms - last_ms;
        if elapsed_ms < 0.0 {
            log::warn!("frame clock went backwards by {:.3}ms, rebasing", -elapsed_ms);
            self.last_ms = Some(now_ms);
            return Some(0.0);
        }
        if elapsed_ms + JITTER_MS < self.min_interval_ms {
            return None;
        }
        self.last_ms = Some(now_ms);
        Some(elapsed_ms / 1000.0)
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_running(&self) -> bool {
        !self.closed
    }
}
