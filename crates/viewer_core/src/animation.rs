//! Time-based camera interpolation.
//!
//! Everything here is a pure function of the `Instant` passed in; callers
//! decide where `now` comes from.

use std::time::{Duration, Instant};

use shared::domain::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    InOutCubic,
    OutCubic,
    Linear,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationJob {
    pub start: Camera,
    pub target: Camera,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationJob {
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn evaluate(&self, now: Instant) -> Camera {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        self.start.lerp(&self.target, self.easing.apply(t))
    }
}

/// Owns the camera and at most one in-flight animation.
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    settled: Camera,
    job: Option<AnimationJob>,
    easing: Easing,
}

impl CameraAnimator {
    pub fn new(camera: Camera) -> Self {
        Self {
            settled: camera,
            job: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn current(&self, now: Instant) -> Camera {
        match &self.job {
            Some(job) => job.evaluate(now),
            None => self.settled,
        }
    }

    /// Where the camera is heading: the live job's target, or the settled
    /// camera when idle.
    pub fn target(&self) -> Camera {
        self.job.map_or(self.settled, |job| job.target)
    }

    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// Starts a transition from the camera as it looks at `now`, replacing
    /// any running job. Non-positive durations settle immediately.
    pub fn request_transition(&mut self, target: Camera, duration_ms: i64, now: Instant) {
        if duration_ms <= 0 {
            self.snap(target);
            return;
        }

        let start = self.current(now);
        self.job = Some(AnimationJob {
            start,
            target,
            started_at: now,
            duration: Duration::from_millis(duration_ms as u64),
            easing: self.easing,
        });
    }

    /// Retires a finished job, leaving the camera exactly on its target.
    pub fn tick(&mut self, now: Instant) -> Camera {
        if let Some(job) = self.job {
            if job.is_finished(now) {
                self.settled = job.target;
                self.job = None;
            }
        }
        self.current(now)
    }

    pub fn snap(&mut self, camera: Camera) {
        self.settled = camera;
        self.job = None;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
