//! Robot tuning.
//!
//! Everything here is fixed for the lifetime of a [`NoMercy`](crate::NoMercy).
//! Defaults reproduce the stock robot; a JSON file in the robot's data
//! directory can override any subset of fields.
use serde::Deserialize;
use thiserror::Error;

use crate::rules::{MAX_BULLET_POWER, MIN_BULLET_POWER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("history capacity must be within [2, 1024], got {0}")]
    HistoryCapacity(usize),
    #[error("wall margin must be a non-negative number, got {0}")]
    WallMargin(f64),
    #[error("max prediction steps must be positive")]
    PredictionSteps,
    #[error("bullet power {0} outside [0.1, 3.0]")]
    BulletPower(f64),
    #[error("radar lock width must be positive, got {0}")]
    RadarLockWidth(f64),
    #[error("low energy threshold must be a finite number of at least 5, got {0}")]
    LowEnergyThreshold(f64),
    #[error("orbit distance must be a finite non-negative number, got {0}")]
    OrbitDistance(f64),
    #[error("orbit offset must be a finite angle, got {0}")]
    OrbitOffset(f64),
}

/// Largest number of scans a history may hold.
pub const MAX_HISTORY_CAPACITY: usize = 1024;

/// Cheap shots always start at or above this energy.
const MIN_LOW_ENERGY_THRESHOLD: f64 = 5.0;

/// How a scanned robot gets shot at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Targeting {
    /// Step the target forward until a bullet could reach it.
    Predictive,
    /// Circle the target and lead by its lateral displacement.
    Orbit,
}

/// 24-bit RGB colors for each part of the robot. All black by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub body: u32,
    pub gun: u32,
    pub radar: u32,
    pub bullet: u32,
    pub scan_arc: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Distance from a wall at which we start backing off.
    pub wall_margin: f64,
    pub colors: ColorScheme,
    /// Number of scans kept for the scanned robot.
    pub history_capacity: usize,
    /// Hard cap on predictor ticks.
    pub max_prediction_steps: u32,
    /// At or below this energy we only fire `low_energy_power` shots.
    pub low_energy_threshold: f64,
    pub low_energy_power: f64,
    pub max_power: f64,
    /// Swing the radar past the target on each scan instead of stopping on it.
    pub radar_overshoot: bool,
    /// Width in pixels the radar overshoots the target by.
    pub radar_lock_width: f64,
    pub orbit_offset_degrees: f64,
    pub orbit_distance: f64,
    pub targeting: Targeting,
}
impl Default for RobotConfig {
    fn default() -> Self {
        RobotConfig {
            wall_margin: 50.0,
            colors: ColorScheme::default(),
            history_capacity: 16,
            max_prediction_steps: 1000,
            low_energy_threshold: 5.0,
            low_energy_power: 1.0,
            max_power: MAX_BULLET_POWER,
            radar_overshoot: false,
            radar_lock_width: 36.0,
            orbit_offset_degrees: 100.0,
            orbit_distance: 400.0,
            targeting: Targeting::Predictive,
        }
    }
}
impl RobotConfig {
    /// Parses and validates a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<RobotConfig, ConfigError> {
        let config: RobotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(ConfigError::HistoryCapacity(self.history_capacity));
        }
        if self.wall_margin.is_nan() || self.wall_margin < 0.0 {
            return Err(ConfigError::WallMargin(self.wall_margin));
        }
        if self.max_prediction_steps == 0 {
            return Err(ConfigError::PredictionSteps);
        }
        for power in [self.low_energy_power, self.max_power] {
            if !(MIN_BULLET_POWER..=MAX_BULLET_POWER).contains(&power) {
                return Err(ConfigError::BulletPower(power));
            }
        }
        if self.radar_lock_width.is_nan() || self.radar_lock_width <= 0.0 {
            return Err(ConfigError::RadarLockWidth(self.radar_lock_width));
        }
        if !self.low_energy_threshold.is_finite()
            || self.low_energy_threshold < MIN_LOW_ENERGY_THRESHOLD
        {
            return Err(ConfigError::LowEnergyThreshold(self.low_energy_threshold));
        }
        if !self.orbit_distance.is_finite() || self.orbit_distance < 0.0 {
            return Err(ConfigError::OrbitDistance(self.orbit_distance));
        }
        if !self.orbit_offset_degrees.is_finite() {
            return Err(ConfigError::OrbitOffset(self.orbit_offset_degrees));
        }
        Ok(())
    }
}
