//! Frame timing and fixed-step scheduling for the simulation loop.

use std::time::{Duration, Instant};

/// Wall-clock driven frame clock with a fixed-step accumulator.
///
/// The host calls [`Clock::update`] once per outer frame, then drains
/// [`Clock::should_fixed_step`] to run simulation ticks at a stable rate.
/// Behavior code never reads this directly; it receives the fixed delta
/// per tick.
#[derive(Debug)]
pub struct Clock {
    /// Time when the clock was created.
    started: Instant,
    /// Time of the last `update` call.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Outer frames since start.
    frame_count: u64,
    /// Fixed simulation timestep (default 60 Hz).
    fixed_step: Duration,
    /// Unconsumed time carried toward the next fixed step.
    accumulator: Duration,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a clock ticking at the default 60 Hz fixed rate.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fixed_step: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Create a clock with a specific fixed rate in Hz.
    pub fn with_fixed_hz(hz: f64) -> Self {
        let mut clock = Self::new();
        clock.set_fixed_hz(hz);
        clock
    }

    /// Advance timing at the start of a new outer frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.elapsed = now - self.started;
        self.frame_count += 1;
        self.accumulator += self.delta;
    }

    /// Check if a fixed step is due and consume its share of time.
    pub fn should_fixed_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_step {
            self.accumulator -= self.fixed_step;
            true
        } else {
            false
        }
    }

    /// Get the last frame's delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_step.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get the number of outer frames since start.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Set the fixed step rate in Hz.
    pub fn set_fixed_hz(&mut self, hz: f64) {
        self.fixed_step = Duration::from_secs_f64(1.0 / hz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_steps_drain_accumulated_time() {
        let mut clock = Clock::with_fixed_hz(10.0); // 100 ms steps
        clock.accumulator = Duration::from_millis(250);

        assert!(clock.should_fixed_step());
        assert!(clock.should_fixed_step());
        assert!(!clock.should_fixed_step());
        assert_eq!(clock.accumulator, Duration::from_millis(50));
    }

    #[test]
    fn fixed_dt_matches_rate() {
        let clock = Clock::with_fixed_hz(50.0);
        assert!((clock.fixed_dt() - 0.02).abs() < 1e-6);
    }
}
