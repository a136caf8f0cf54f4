use oort_api::prelude::{angle_diff, TAU};

pub mod movement;
pub mod vec_utils;

pub use movement::*;
pub use vec_utils::VecUtils;

/// Normalizes `angle` into (-PI, PI].
pub fn normal_relative_angle(angle: f64) -> f64 {
    angle_diff(0.0, angle)
}

/// Normalizes `angle` into [0, TAU).
pub fn normal_absolute_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
