use oort_api::prelude::{vec2, Vec2};

use super::normal_absolute_angle;

/// Compass helpers. Headings are radians with 0 pointing north (+y) and
/// growing clockwise, the way the arena reports them.
pub trait VecUtils {
    fn compass(heading: f64, magnitude: f64) -> Self;
    fn bearing_to(&self, other: Self) -> f64;
}
impl VecUtils for Vec2 {
    /// Creates the vector of length `magnitude` pointing along `heading`.
    fn compass(heading: f64, magnitude: f64) -> Self {
        vec2(magnitude * heading.sin(), magnitude * heading.cos())
    }

    /// Absolute heading from `self` towards `other`, in [0, TAU).
    fn bearing_to(&self, other: Self) -> f64 {
        let d = other - *self;
        normal_absolute_angle(d.x.atan2(d.y))
    }
}
