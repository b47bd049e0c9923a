use std::error::Error;
use std::fmt;

use swipematch_animation::AnimationSpec;

use crate::gesture_constants::{
    EXIT_DURATION_MS, EXIT_EASING, PROGRESS_CAP, SNAP_BACK_DURATION_MS, SNAP_BACK_EASING,
};

/// Tuning for one swipe deck.
///
/// The commit threshold has no default; callers choose it per deck.
///
/// ```
/// use swipematch_foundation::SwipeConfig;
///
/// let config = SwipeConfig::new(120.0).with_reduced_motion(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum absolute drag distance, exclusive, that commits a swipe.
    pub threshold: f32,
    /// Drag distance at which the next card is fully revealed.
    pub progress_cap: f32,
    pub exit_duration_ms: u64,
    pub snap_back_duration_ms: u64,
    /// Drop drag tilt and fade for users who asked for less motion.
    pub reduced_motion: bool,
}

impl SwipeConfig {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            progress_cap: PROGRESS_CAP,
            exit_duration_ms: EXIT_DURATION_MS,
            snap_back_duration_ms: SNAP_BACK_DURATION_MS,
            reduced_motion: false,
        }
    }

    pub fn with_progress_cap(mut self, progress_cap: f32) -> Self {
        self.progress_cap = progress_cap;
        self
    }

    pub fn with_exit_duration_ms(mut self, millis: u64) -> Self {
        self.exit_duration_ms = millis;
        self
    }

    pub fn with_snap_back_duration_ms(mut self, millis: u64) -> Self {
        self.snap_back_duration_ms = millis;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(SwipeConfigError::InvalidThreshold(self.threshold));
        }
        if !self.progress_cap.is_finite() || self.progress_cap <= 0.0 {
            return Err(SwipeConfigError::InvalidProgressCap(self.progress_cap));
        }
        if self.exit_duration_ms == 0 {
            return Err(SwipeConfigError::ZeroExitDuration);
        }
        Ok(())
    }

    pub fn exit_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.exit_duration_ms, EXIT_EASING)
    }

    pub fn snap_back_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.snap_back_duration_ms, SNAP_BACK_EASING)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeConfigError {
    InvalidThreshold(f32),
    InvalidProgressCap(f32),
    /// The exit animation is what ends the animating state, so it must run.
    ZeroExitDuration,
}

impl fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeConfigError::InvalidThreshold(value) => {
                write!(f, "swipe threshold must be a positive distance, got {value}")
            }
            SwipeConfigError::InvalidProgressCap(value) => {
                write!(f, "progress cap must be a positive distance, got {value}")
            }
            SwipeConfigError::ZeroExitDuration => {
                write!(f, "exit animation duration must be non-zero")
            }
        }
    }
}

impl Error for SwipeConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_uses_standard_timings() {
        let config = SwipeConfig::new(50.0);
        assert_eq!(config.threshold, 50.0);
        assert_eq!(config.progress_cap, 200.0);
        assert_eq!(config.exit_spec().duration_millis, 500);
        assert_eq!(config.snap_back_spec().duration_millis, 300);
        assert!(!config.reduced_motion);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert_eq!(
            SwipeConfig::new(0.0).validate(),
            Err(SwipeConfigError::InvalidThreshold(0.0))
        );
        assert!(SwipeConfig::new(f32::NAN).validate().is_err());
        assert_eq!(
            SwipeConfig::new(80.0).with_progress_cap(-1.0).validate(),
            Err(SwipeConfigError::InvalidProgressCap(-1.0))
        );
        assert_eq!(
            SwipeConfig::new(80.0).with_exit_duration_ms(0).validate(),
            Err(SwipeConfigError::ZeroExitDuration)
        );
        assert!(SwipeConfig::new(80.0)
            .with_snap_back_duration_ms(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn errors_render_readably() {
        let message = SwipeConfigError::InvalidThreshold(-3.0).to_string();
        assert_eq!(message, "swipe threshold must be a positive distance, got -3");
    }
}
