//! Sentry tuning. Author-time values, read-only during simulation.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Tuning for one sentry. Every field carries a documented range the
/// behavior was authored against; `validate` reports departures and
/// `clamped` forces values back inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryConfig {
    /// How far the sentry can detect its target, in world units (1-20).
    #[serde(default = "default_detection_range")]
    pub detection_range: f32,
    /// Full view-cone angle in degrees (45-180).
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f32,
    /// Turn rate in degrees per second (180-500).
    #[serde(default = "default_turning_speed")]
    pub turning_speed: f32,
    /// Pursuit speed in units per second (1-5).
    #[serde(default = "default_chase_speed")]
    pub chase_speed: f32,
    /// Seconds between idle look-around turns (1-10).
    #[serde(default = "default_look_interval")]
    pub look_interval: f32,
    /// Require a clear ray to the target on top of the distance and
    /// view-cone checks.
    #[serde(default = "default_true")]
    pub check_occlusion: bool,
    /// Apply the view-cone check at all. Off means distance (plus
    /// occlusion, if enabled) alone decides.
    #[serde(default = "default_true")]
    pub use_field_of_view: bool,
}

fn default_detection_range() -> f32 {
    8.0
}
fn default_field_of_view() -> f32 {
    90.0
}
fn default_turning_speed() -> f32 {
    300.0
}
fn default_chase_speed() -> f32 {
    2.0
}
fn default_look_interval() -> f32 {
    4.0
}
fn default_true() -> bool {
    true
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            detection_range: default_detection_range(),
            field_of_view: default_field_of_view(),
            turning_speed: default_turning_speed(),
            chase_speed: default_chase_speed(),
            look_interval: default_look_interval(),
            check_occlusion: true,
            use_field_of_view: true,
        }
    }
}

/// A tuning value outside its documented range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("detection_range {0} outside 1-20")]
    DetectionRange(f32),
    #[error("field_of_view {0} outside 45-180")]
    FieldOfView(f32),
    #[error("turning_speed {0} outside 180-500")]
    TurningSpeed(f32),
    #[error("chase_speed {0} outside 1-5")]
    ChaseSpeed(f32),
    #[error("look_interval {0} outside 1-10")]
    LookInterval(f32),
}

impl SentryConfig {
    pub const DETECTION_RANGE: RangeInclusive<f32> = 1.0..=20.0;
    pub const FIELD_OF_VIEW: RangeInclusive<f32> = 45.0..=180.0;
    pub const TURNING_SPEED: RangeInclusive<f32> = 180.0..=500.0;
    pub const CHASE_SPEED: RangeInclusive<f32> = 1.0..=5.0;
    pub const LOOK_INTERVAL: RangeInclusive<f32> = 1.0..=10.0;

    /// Check every field against its documented range, reporting the first
    /// one that falls outside.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::DETECTION_RANGE.contains(&self.detection_range) {
            return Err(ConfigError::DetectionRange(self.detection_range));
        }
        if !Self::FIELD_OF_VIEW.contains(&self.field_of_view) {
            return Err(ConfigError::FieldOfView(self.field_of_view));
        }
        if !Self::TURNING_SPEED.contains(&self.turning_speed) {
            return Err(ConfigError::TurningSpeed(self.turning_speed));
        }
        if !Self::CHASE_SPEED.contains(&self.chase_speed) {
            return Err(ConfigError::ChaseSpeed(self.chase_speed));
        }
        if !Self::LOOK_INTERVAL.contains(&self.look_interval) {
            return Err(ConfigError::LookInterval(self.look_interval));
        }
        Ok(())
    }

    /// Copy with every field forced into its documented range.
    pub fn clamped(&self) -> Self {
        let mut config = self.clone();
        config.detection_range = clamp_to(self.detection_range, &Self::DETECTION_RANGE);
        config.field_of_view = clamp_to(self.field_of_view, &Self::FIELD_OF_VIEW);
        config.turning_speed = clamp_to(self.turning_speed, &Self::TURNING_SPEED);
        config.chase_speed = clamp_to(self.chase_speed, &Self::CHASE_SPEED);
        config.look_interval = clamp_to(self.look_interval, &Self::LOOK_INTERVAL);
        config
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}
