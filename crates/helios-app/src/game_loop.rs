//! Fixed-timestep frame loop ("Fix Your Timestep" pattern).
//!
//! Decouples simulation (fixed 60 Hz) from rendering (variable rate) with an
//! accumulator, so planetary motion advances by the same simulated step per
//! tick regardless of frame rate.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent the spiral of death: a stalled frame
/// is absorbed as slowdown instead of a burst of catch-up ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state. Call [`tick`](Self::tick) once per frame.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Run one frame: measure elapsed wall time, run zero or more fixed-rate
    /// simulation steps, then render once with the interpolation alpha.
    pub fn tick(&mut self, mut update_fn: impl FnMut(f64, f64), mut render_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let mut frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;

        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        let alpha = if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        };

        render_fn(alpha);
        self.frame_count += 1;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Test double accepting explicit frame times instead of wall-clock time.
#[cfg(test)]
struct TestableGameLoop {
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

#[cfg(test)]
impl TestableGameLoop {
    fn new() -> Self {
        Self {
            accumulator: 0.0,
            total_sim_time: 0.0,
            update_count: 0,
        }
    }

    fn tick(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> f64 {
        let clamped = frame_time.min(MAX_FRAME_TIME);
        self.accumulator += clamped;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_consumes_accumulator() {
        let mut loop_ = TestableGameLoop::new();
        let mut updates = 0u32;
        loop_.tick(FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 1);
        assert!(loop_.accumulator.abs() < 1e-12);
    }

    #[test]
    fn test_large_frame_runs_multiple_steps() {
        let mut loop_ = TestableGameLoop::new();
        let mut updates = 0u32;
        loop_.tick(3.0 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 3);
        assert!((loop_.total_sim_time - 3.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_partial_frame_defers_update() {
        let mut loop_ = TestableGameLoop::new();
        let mut updates = 0u32;
        let alpha = loop_.tick(0.5 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 0);
        assert!((alpha - 0.5).abs() < 1e-10, "alpha {alpha}");
    }

    #[test]
    fn test_frame_time_clamp_bounds_catch_up() {
        let mut loop_ = TestableGameLoop::new();
        let mut updates = 0u32;
        loop_.tick(10.0, |_, _| updates += 1);
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(updates <= max_updates, "{updates} > {max_updates}");
        assert!(updates > 0);
    }

    #[test]
    fn test_sim_time_matches_update_count() {
        let mut loop_ = TestableGameLoop::new();
        for _ in 0..10 {
            loop_.tick(FIXED_DT * 2.0, |_, _| {});
        }
        let expected = loop_.update_count as f64 * FIXED_DT;
        assert!((loop_.total_sim_time - expected).abs() < 1e-10);
    }

    #[test]
    fn test_game_loop_starts_idle() {
        let loop_ = GameLoop::default();
        assert_eq!(loop_.frame_count(), 0);
        assert_eq!(loop_.update_count(), 0);
        assert_eq!(loop_.total_sim_time(), 0.0);
    }
}
