//! Timed recovery animation
//!
//! Interpolates a single value toward a rest target over a fixed duration.
//! One instance is reused across overscroll episodes: it can be paused when
//! a new touch lands mid-flight and re-armed from the interrupted value, so
//! the visual never snaps.

use crate::easing::Easing;

/// Default recovery duration in milliseconds
pub const DEFAULT_RECOVERY_DURATION_MS: u32 = 250;

/// Playback state of a [`RecoveryAnimation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Not armed; `value()` rests at the target
    #[default]
    Idle,
    /// Advancing under `tick()`
    Running,
    /// Frozen mid-flight; `value()` holds until resumed or re-armed
    Paused,
    /// Reached the target; `value()` equals the target exactly
    Finished,
}

/// A fixed-duration interpolation from a start value to a target.
///
/// Driven cooperatively: the owner calls [`tick`](Self::tick) once per frame
/// with the elapsed milliseconds and reads [`value`](Self::value).
#[derive(Debug, Clone)]
pub struct RecoveryAnimation {
    duration_ms: u32,
    easing: Easing,
    start_value: f32,
    target: f32,
    current_time: f32,
    playback: Playback,
}

impl RecoveryAnimation {
    /// Create an animation with the given duration and linear easing
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::Linear,
            start_value: 0.0,
            target: 0.0,
            current_time: 0.0,
            playback: Playback::Idle,
        }
    }

    /// Set the easing function (builder pattern)
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Re-arm the animation from `from` to `to` and start it.
    ///
    /// The same instance is reused across episodes; any previous run is
    /// discarded.
    pub fn restart(&mut self, from: f32, to: f32) {
        tracing::trace!("recovery restart: {from:.1} -> {to:.1}");
        self.start_value = from;
        self.target = to;
        self.current_time = 0.0;
        self.playback = Playback::Running;
    }

    /// Freeze a running animation at its current value
    pub fn pause(&mut self) {
        if self.playback == Playback::Running {
            self.playback = Playback::Paused;
        }
    }

    /// Continue a paused animation from its frozen progress
    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Running;
        }
    }

    /// Discard the current run entirely
    pub fn cancel(&mut self) {
        self.current_time = 0.0;
        self.playback = Playback::Idle;
    }

    /// Advance by `dt_ms` milliseconds.
    ///
    /// Returns true while the animation is still running afterwards. On
    /// crossing the duration the value clamps to the target and the state
    /// becomes [`Playback::Finished`].
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.playback != Playback::Running {
            return false;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playback = Playback::Finished;
            return false;
        }

        true
    }

    /// Current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        match self.playback {
            Playback::Idle | Playback::Finished => self.target,
            Playback::Running | Playback::Paused => {
                let eased = self.easing.apply(self.progress());
                self.start_value + (self.target - self.start_value) * eased
            }
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.playback == Playback::Finished
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Default for RecoveryAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_RECOVERY_DURATION_MS)
    }
}
