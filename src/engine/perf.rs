use std::time::Duration;

use crate::config::PerformancePolicy;

/// Frame rate measured over one closed sampling window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FpsSample {
    /// Frames per second, rounded.
    pub fps: u32,
    /// Host time at which the window closed.
    pub at: Duration,
}

/// Quality change decided by the governor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceTransition {
    /// Entered low-performance mode.
    Degraded,
    /// Left low-performance mode (only under [`PerformancePolicy::Recover`]).
    Recovered,
}

/// Counts frames per sampling window and decides when to degrade quality.
#[derive(Clone, Debug)]
pub struct PerformanceGovernor {
    policy: PerformancePolicy,
    low_fps_threshold: u32,
    window: Duration,
    window_start: Option<Duration>,
    frames: u32,
    low_performance: bool,
    healthy_windows: u32,
    last_sample: Option<FpsSample>,
}

impl PerformanceGovernor {
    /// New governor at full quality.
    pub fn new(policy: PerformancePolicy, low_fps_threshold: u32, window: Duration) -> Self {
        Self {
            policy,
            low_fps_threshold,
            window,
            window_start: None,
            frames: 0,
            low_performance: false,
            healthy_windows: 0,
            last_sample: None,
        }
    }

    /// Open a fresh sampling window at `now` without touching the quality state.
    pub fn reset_window(&mut self, now: Duration) {
        self.window_start = Some(now);
        self.frames = 0;
    }

    /// Whether low-performance mode is active.
    pub fn is_low_performance(&self) -> bool {
        self.low_performance
    }

    /// Most recent closed window, if any.
    pub fn last_sample(&self) -> Option<FpsSample> {
        self.last_sample
    }

    /// Count one frame at host time `now`.
    pub fn tick(&mut self, now: Duration) -> Option<PerformanceTransition> {
        self.frames += 1;
        let start = *self.window_start.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        if elapsed < self.window {
            return None;
        }

        let fps = (f64::from(self.frames) / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = Some(now);
        self.last_sample = Some(FpsSample { fps, at: now });
        self.evaluate(fps)
    }

    fn evaluate(&mut self, fps: u32) -> Option<PerformanceTransition> {
        if !self.low_performance {
            if fps < self.low_fps_threshold {
                self.low_performance = true;
                self.healthy_windows = 0;
                return Some(PerformanceTransition::Degraded);
            }
            return None;
        }

        match self.policy {
            PerformancePolicy::OneWay => None,
            PerformancePolicy::Recover {
                recover_fps,
                sustain_windows,
            } => {
                if fps < recover_fps {
                    self.healthy_windows = 0;
                    return None;
                }
                self.healthy_windows += 1;
                if self.healthy_windows < sustain_windows {
                    return None;
                }
                self.low_performance = false;
                self.healthy_windows = 0;
                Some(PerformanceTransition::Recovered)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/perf.rs"]
mod tests;
