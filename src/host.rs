//! The seam between the robot and the engine running it.
//!
//! All `set_*` commands are deferred: the engine applies whatever was last set
//! when [`Host::execute`] ends the turn, so a later call overrides an earlier
//! one within the same turn.
use oort_api::prelude::{vec2, Vec2};

use crate::config::ColorScheme;
use crate::rules::ROBOT_HALF_SIZE;

/// Our own kinematic state, sampled at the start of each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnState {
    pub position: Vec2,
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub energy: f64,
}

/// The battlefield. The origin is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}
impl Arena {
    pub fn new(width: f64, height: f64) -> Arena {
        Arena { width, height }
    }

    /// Whether a robot centered at `p` fits inside the walls.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= ROBOT_HALF_SIZE
            && p.x <= self.width - ROBOT_HALF_SIZE
            && p.y >= ROBOT_HALF_SIZE
            && p.y <= self.height - ROBOT_HALF_SIZE
    }

    /// Pulls `p` back to the closest point a robot's center can occupy.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        vec2(
            p.x.max(ROBOT_HALF_SIZE).min(self.width - ROBOT_HALF_SIZE),
            p.y.max(ROBOT_HALF_SIZE).min(self.height - ROBOT_HALF_SIZE),
        )
    }
}

/// Which parts turn independently of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustments {
    pub gun_for_robot_turn: bool,
    pub radar_for_robot_turn: bool,
    pub radar_for_gun_turn: bool,
}
impl Adjustments {
    /// Gun and radar both decoupled from the body, radar decoupled from the gun.
    pub fn independent() -> Adjustments {
        Adjustments {
            gun_for_robot_turn: true,
            radar_for_robot_turn: true,
            radar_for_gun_turn: true,
        }
    }
}

pub trait Host {
    fn own_state(&self) -> OwnState;
    fn arena(&self) -> Arena;
    /// Radians the radar still has to turn from earlier commands.
    fn radar_turn_remaining(&self) -> f64;

    fn set_ahead(&mut self, distance: f64);
    fn set_back(&mut self, distance: f64);
    /// Turns the body clockwise by `angle` radians.
    fn set_turn_right(&mut self, angle: f64);
    fn set_turn_gun_right(&mut self, angle: f64);
    fn set_turn_radar_right(&mut self, angle: f64);
    fn set_fire(&mut self, power: f64);
    fn set_colors(&mut self, colors: &ColorScheme);
    fn set_adjustments(&mut self, adjustments: Adjustments);
    /// Forces a radar scan this turn even if the radar didn't move.
    fn scan(&mut self);

    /// Ends the turn. Returns false once the round is over.
    fn execute(&mut self) -> bool;
}
