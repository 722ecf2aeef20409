use web_time::{Duration, Instant};

/// Frame timing: per-tick delta for the camera scheduler plus a smoothed
/// FPS readout.
pub struct FrameTiming {
    /// Last tick timestamp
    last_tick: Instant,
    /// Longest delta handed out, so a stall does not become one huge step
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl FrameTiming {
    /// Create a timer that reports at most `max_delta` per tick.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Mark the start of a frame and return seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).min(self.max_delta);
        self.last_tick = now;
        self.record(elapsed)
    }

    /// Restart the clock, e.g. when frames resume after an idle period.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Fold one frame duration into the FPS average and return it in
    /// seconds.
    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_capped() {
        let mut timing = FrameTiming::new(Duration::ZERO);
        assert_eq!(timing.tick(), 0.0);
    }

    #[test]
    fn fps_moves_towards_frame_rate() {
        let mut timing = FrameTiming::default();
        for _ in 0..200 {
            let _ = timing.record(Duration::from_millis(10));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn zero_length_frame_keeps_average() {
        let mut timing = FrameTiming::default();
        let _ = timing.record(Duration::ZERO);
        assert_eq!(timing.fps(), 60.0);
    }
}
