//! Physics constants published by the host engine.
//!
//! These mirror the engine's rules so the predictor can do its own arithmetic.
//! The engine remains the authority: nothing here simulates a battle.
use oort_api::prelude::PI;

/// Half the width of a robot's square body. Robots can't get closer than
/// this to a wall.
pub const ROBOT_HALF_SIZE: f64 = 18.0;

pub const MIN_BULLET_POWER: f64 = 0.1;
pub const MAX_BULLET_POWER: f64 = 3.0;

/// Maximum radar rotation per tick, in radians.
pub const RADAR_TURN_RATE: f64 = 45.0 * PI / 180.0;

/// Distance a bullet fired with `power` travels per tick.
pub fn bullet_speed(power: f64) -> f64 {
    20.0 - 3.0 * power
}
