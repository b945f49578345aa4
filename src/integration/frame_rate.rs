use std::time::Instant;

/// Frames-per-second estimate from the gap between consecutive frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRateMeter {
    last: Option<Instant>,
    fps: u32,
}

impl FrameRateMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the updated rate.
    ///
    /// The first tick and a zero-length gap both report 0.
    pub fn tick(&mut self, now: Instant) -> u32 {
        if let Some(last) = self.last {
            let elapsed_ms = now.saturating_duration_since(last).as_secs_f64() * 1000.0;
            self.fps = if elapsed_ms > 0.0 {
                (1000.0 / elapsed_ms).round() as u32
            } else {
                0
            };
        }
        self.last = Some(now);
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_is_zero() {
        let mut meter = FrameRateMeter::new();
        assert_eq!(meter.tick(Instant::now()), 0);
    }

    #[test]
    fn test_rate_from_gap() {
        let mut meter = FrameRateMeter::new();
        let t0 = Instant::now();
        meter.tick(t0);
        assert_eq!(meter.tick(t0 + Duration::from_millis(40)), 25);
        assert_eq!(meter.tick(t0 + Duration::from_millis(73)), 30);
        assert_eq!(meter.fps(), 30);
    }

    #[test]
    fn test_zero_gap() {
        let mut meter = FrameRateMeter::new();
        let t0 = Instant::now();
        meter.tick(t0);
        assert_eq!(meter.tick(t0), 0);
    }
}
