//! Predictive aiming.
//!
//! The target is stepped forward one tick at a time, moving at its last seen
//! velocity and turning by its last seen heading change, until a bullet fired
//! now could have covered the distance to it. If the target would hit a wall
//! first we assume it stops there.
use log::trace;
use oort_api::prelude::{Vec2, Vec2Extras};

use crate::config::RobotConfig;
use crate::host::{Arena, OwnState};
use crate::rules::bullet_speed;
use crate::target::Observation;
use crate::utils::{normal_relative_angle, VecUtils};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub position: Vec2,
    /// Ticks the virtual clock advanced.
    pub steps: u32,
    /// Set when the path ran into a wall.
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    /// Relative gun turn in radians, positive is clockwise.
    pub gun_turn: f64,
    pub power: f64,
    pub prediction: Prediction,
}

/// Full power while healthy, cheap shots once energy runs low.
pub fn bullet_power(energy: f64, config: &RobotConfig) -> f64 {
    if energy <= config.low_energy_threshold {
        config.low_energy_power
    } else {
        config.max_power.min(energy)
    }
}

/// Where `target` will be when a bullet of `power` fired from `origin` can
/// reach it.
pub fn predict_intercept(
    origin: Vec2,
    target: &Observation,
    heading_delta: f64,
    power: f64,
    arena: &Arena,
    max_steps: u32,
) -> Prediction {
    let speed = bullet_speed(power);
    let mut position = target.position;
    let mut heading = target.heading;
    let mut steps = 0;
    let mut clamped = false;
    while steps < max_steps {
        steps += 1;
        if steps as f64 * speed >= origin.distance(position) {
            break;
        }
        position += Vec2::compass(heading, target.velocity);
        heading += heading_delta;
        if !arena.contains(position) {
            position = arena.clamp(position);
            clamped = true;
            break;
        }
    }
    if !arena.contains(position) {
        position = arena.clamp(position);
        clamped = true;
    }
    Prediction {
        position,
        steps,
        clamped,
    }
}

pub fn solve(
    own: &OwnState,
    target: &Observation,
    heading_delta: f64,
    arena: &Arena,
    config: &RobotConfig,
) -> AimSolution {
    let power = bullet_power(own.energy, config);
    let prediction = predict_intercept(
        own.position,
        target,
        heading_delta,
        power,
        arena,
        config.max_prediction_steps,
    );
    let theta = own.position.bearing_to(prediction.position);
    let gun_turn = normal_relative_angle(theta - own.gun_heading);
    trace!(
        "intercept ({:.1}, {:.1}) after {} ticks, clamped={}",
        prediction.position.x,
        prediction.position.y,
        prediction.steps,
        prediction.clamped
    );
    AimSolution {
        gun_turn,
        power,
        prediction,
    }
}

/// Single-shot lead: offsets the direct bearing by how far the target slides
/// sideways while the bullet is in flight.
pub fn displacement_lead(own: &OwnState, target: &Observation, power: f64) -> f64 {
    let absolute = target.absolute_bearing;
    let displacement = target.velocity * (target.heading - absolute).sin() / bullet_speed(power);
    normal_relative_angle(absolute - own.gun_heading + displacement)
}
