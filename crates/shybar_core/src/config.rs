//! Coordinator configuration
//!
//! All tuning constants of the scroll-to-chrome translation live here with
//! the values the behavior was designed around. Validation rejects
//! non-finite or negative values up front; the event path itself never
//! fails.

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Snap velocity threshold must be finite and non-negative
    #[error("snap velocity threshold must be finite and >= 0, got {0}")]
    SnapVelocityThreshold(f32),

    /// Scrollable-length factor must be finite and non-negative
    #[error("minimum scrollable factor must be finite and >= 0, got {0}")]
    MinScrollableFactor(f32),

    /// Delta noise floor must be finite and non-negative
    #[error("delta epsilon must be finite and >= 0, got {0}")]
    DeltaEpsilon(f32),

    /// Trailing clamp slack must be finite and non-negative
    #[error("trailing slack must be finite and >= 0, got {0}")]
    TrailingSlack(f32),
}

/// Tuning constants for the scroll coordinator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatorConfig {
    /// Release velocity (units/second) above which a gesture end always
    /// snaps the chrome open, regardless of motion state
    pub snap_velocity_threshold: f32,
    /// Content must scroll further than this many visible frames before
    /// any scroll-handling cycle runs
    pub min_scrollable_factor: f32,
    /// Deltas at or below this magnitude are applied but never classified
    /// as a direction
    pub delta_epsilon: f32,
    /// Subtracted before flooring the trailing clamp boundary, absorbing
    /// floating-point jitter in offsets reported near the content bottom
    pub trailing_slack: f32,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            snap_velocity_threshold: 500.0,
            min_scrollable_factor: 3.0,
            delta_epsilon: 1e-5,
            trailing_slack: 0.5,
        }
    }
}

impl CoordinatorConfig {
    /// Config that snaps open on gentler flicks
    pub fn eager_snap() -> Self {
        Self {
            snap_velocity_threshold: 250.0,
            ..Default::default()
        }
    }

    /// Config that allows chrome hiding on shorter content
    pub fn short_content() -> Self {
        Self {
            min_scrollable_factor: 1.0,
            ..Default::default()
        }
    }

    /// Check every constant is finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn ok(v: f32) -> bool {
            v.is_finite() && v >= 0.0
        }

        if !ok(self.snap_velocity_threshold) {
            return Err(ConfigError::SnapVelocityThreshold(
                self.snap_velocity_threshold,
            ));
        }
        if !ok(self.min_scrollable_factor) {
            return Err(ConfigError::MinScrollableFactor(self.min_scrollable_factor));
        }
        if !ok(self.delta_epsilon) {
            return Err(ConfigError::DeltaEpsilon(self.delta_epsilon));
        }
        if !ok(self.trailing_slack) {
            return Err(ConfigError::TrailingSlack(self.trailing_slack));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(CoordinatorConfig::default().validate(), Ok(()));
        assert_eq!(CoordinatorConfig::eager_snap().validate(), Ok(()));
        assert_eq!(CoordinatorConfig::short_content().validate(), Ok(()));
    }

    #[test]
    fn test_default_constants() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.snap_velocity_threshold, 500.0);
        assert_eq!(config.min_scrollable_factor, 3.0);
        assert_eq!(config.trailing_slack, 0.5);
    }

    #[test]
    fn test_rejects_nonfinite_threshold() {
        let config = CoordinatorConfig {
            snap_velocity_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnapVelocityThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_negative_slack() {
        let config = CoordinatorConfig {
            trailing_slack: -0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TrailingSlack(-0.5)));
    }
}
