use log::trace;

use crate::host::{Host, OwnState};
use crate::rules::RADAR_TURN_RATE;
use crate::target::Observation;
use crate::utils::normal_relative_angle;

/// Keeps the radar on the enemy once found, and spinning until then.
#[derive(Debug, PartialEq)]
pub struct Radar {
    /// `Some(width)` swings the beam past the target by `width` pixels.
    overshoot: Option<f64>,
    sweeps: usize,
}
impl Radar {
    pub fn new(overshoot: Option<f64>) -> Radar {
        Radar {
            overshoot,
            sweeps: 0,
        }
    }

    /// Restarts a full sweep if the radar has come to rest.
    pub fn bootstrap<H: Host>(&mut self, host: &mut H) {
        if host.radar_turn_remaining() == 0.0 {
            host.set_turn_radar_right(f64::INFINITY);
            self.sweeps += 1;
            trace!("radar sweep {}", self.sweeps);
        }
    }

    /// Turn that points the beam at the target. With an overshoot width the
    /// beam swings just past it, so the next sweep crosses it again from the
    /// other side.
    pub fn lock_turn(&self, own: &OwnState, target: &Observation) -> f64 {
        let angle = normal_relative_angle(target.absolute_bearing - own.radar_heading);
        let Some(width) = self.overshoot else {
            return angle;
        };
        let overshoot = (width / target.distance).atan().min(RADAR_TURN_RATE);
        if angle < 0.0 {
            angle - overshoot
        } else {
            angle + overshoot
        }
    }

    pub fn lock<H: Host>(&self, host: &mut H, own: &OwnState, target: &Observation) {
        host.set_turn_radar_right(self.lock_turn(own, target));
    }

    /// Number of times the radar has been sent spinning.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }
}

/// Aggressive tracking used while orbiting: overturns the offset fivefold.
pub fn orbit_turn(own: &OwnState, target: &Observation) -> f64 {
    5.0 * normal_relative_angle(target.absolute_bearing - own.radar_heading)
}
