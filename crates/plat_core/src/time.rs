//! Wall-clock frame pacing for the driving loop.
//!
//! The simulation integrates once per frame (no substepping); timers inside
//! it consume the measured delta. Large gaps (debugger breaks, window drags)
//! are capped so one frame can never fast-forward the countdown.

use std::time::{Duration, Instant};

const FPS_SAMPLE_COUNT: usize = 60;

pub struct FrameClock {
    pub target_dt: f64,
    pub max_dt: f64,
    pub total_time: f64,
    pub frame_count: u64,
    pub real_dt: f64,
    last_instant: Instant,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
    pub smoothed_frame_time_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            target_dt: 1.0 / 60.0,
            max_dt: 0.25,
            total_time: 0.0,
            frame_count: 0,
            real_dt: 0.0,
            last_instant: Instant::now(),
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    /// Measure the time since the previous call and return it as the frame
    /// delta in seconds.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.record(elapsed)
    }

    /// Feed a known delta instead of measuring one.
    pub fn record(&mut self, elapsed: f64) -> f32 {
        self.real_dt = elapsed;

        // Spiral-of-death cap
        if self.real_dt > self.max_dt {
            log::warn!(
                "Frame took {:.1}ms, capping delta to {}ms",
                self.real_dt * 1000.0,
                self.max_dt * 1000.0
            );
            self.real_dt = self.max_dt;
        }

        self.total_time += self.real_dt;
        self.frame_count += 1;

        self.fps_samples[self.fps_sample_index] = self.real_dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_frame_time_ms = avg_dt * 1000.0;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };

        self.real_dt as f32
    }

    /// How long the caller should sleep to hold `target_dt` pacing.
    pub fn remaining_budget(&self) -> Duration {
        let spent = self.last_instant.elapsed().as_secs_f64();
        Duration::from_secs_f64((self.target_dt - spent).max(0.0))
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_time_and_frames() {
        let mut clock = FrameClock::new();
        let dt = clock.record(0.02);
        assert!((dt - 0.02).abs() < 1e-6);
        clock.record(0.03);
        assert_eq!(clock.frame_count, 2);
        assert!((clock.total_time - 0.05).abs() < 1e-9);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut clock = FrameClock::new();
        let dt = clock.record(3.0);
        assert!((dt as f64 - clock.max_dt).abs() < 1e-6);
        assert!((clock.total_time - clock.max_dt).abs() < 1e-9);
    }

    #[test]
    fn steady_frames_converge_fps() {
        let mut clock = FrameClock::new();
        for _ in 0..FPS_SAMPLE_COUNT {
            clock.record(1.0 / 30.0);
        }
        assert!((clock.smoothed_fps - 30.0).abs() < 0.01);
        assert!((clock.smoothed_frame_time_ms - 33.333).abs() < 0.01);
    }

    #[test]
    fn budget_never_exceeds_target() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        assert!(clock.remaining_budget().as_secs_f64() <= clock.target_dt);
    }
}
