use log::{debug, warn};

use crate::aim::{bullet_power, displacement_lead, solve};
use crate::config::{ConfigError, RobotConfig, Targeting};
use crate::event::{Event, HitRobot, ScannedRobot};
use crate::host::{Adjustments, Host};
use crate::radar::{orbit_turn, Radar};
use crate::target::{Observation, TargetHistory};
use crate::utils::{default_walk, keep_off_walls, normal_relative_angle, reverse};

/// The parts of the robot that change during a round.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotState {
    /// Direction the next reversal will drive in.
    pub forward: bool,
    pub walk: f64,
    pub history: TargetHistory,
}

#[derive(Debug)]
pub struct NoMercy {
    config: RobotConfig,
    state: RobotState,
    radar: Radar,
}
impl Default for NoMercy {
    fn default() -> Self {
        Self::with_valid_config(RobotConfig::default())
    }
}

impl NoMercy {
    pub fn new(config: RobotConfig) -> Result<NoMercy, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: RobotConfig) -> NoMercy {
        NoMercy {
            state: RobotState {
                forward: false,
                walk: 0.0,
                history: TargetHistory::new(config.history_capacity),
            },
            radar: Radar::new(config.radar_overshoot.then_some(config.radar_lock_width)),
            config,
        }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn radar(&self) -> &Radar {
        &self.radar
    }

    /// Paints the robot and frees the gun and radar from the body.
    pub fn start<H: Host>(&mut self, host: &mut H) {
        host.set_colors(&self.config.colors);
        host.set_adjustments(Adjustments::independent());
        self.state.walk = default_walk(&host.arena());
        debug!("walk distance {}", self.state.walk);
    }

    /// One pass of the main loop, before the turn is executed.
    pub fn tick<H: Host>(&mut self, host: &mut H) {
        keep_off_walls(host, self.config.wall_margin, self.state.walk);
        self.radar.bootstrap(host);
    }

    /// Drives the robot until the host ends the round.
    pub fn run<H: Host>(&mut self, host: &mut H) {
        self.start(host);
        loop {
            self.tick(host);
            if !host.execute() {
                break;
            }
        }
    }

    pub fn on_event<H: Host>(&mut self, host: &mut H, event: &Event) {
        match event {
            Event::ScannedRobot(scan) => self.on_scanned_robot(host, scan),
            Event::HitWall(_) | Event::HitByBullet(_) => self.reverse(host),
            Event::HitRobot(hit) => self.on_hit_robot(host, hit),
            Event::BulletHit(hit) => debug!("hit {}, {:.1} energy left", hit.victim, hit.energy),
            Event::BulletMissed => debug!("missed"),
            Event::RoundEnded => {
                debug!("round over after {} sweeps", self.radar.sweeps());
                self.state.history.clear();
            }
        }
    }

    fn on_scanned_robot<H: Host>(&mut self, host: &mut H, scan: &ScannedRobot) {
        if !scan.is_finite() {
            warn!("ignoring unusable scan of {}: {:?}", scan.name, scan);
            return;
        }
        let own = host.own_state();
        let observation = Observation::from_scan(&own, scan);
        self.state.history.record(observation);
        match self.config.targeting {
            Targeting::Predictive => self.predictive(host, &observation),
            Targeting::Orbit => self.orbit(host, &observation),
        }
    }

    fn predictive<H: Host>(&mut self, host: &mut H, target: &Observation) {
        let own = host.own_state();
        self.radar.lock(host, &own, target);
        let solution = solve(
            &own,
            target,
            self.state.history.heading_delta(),
            &host.arena(),
            &self.config,
        );
        debug!(
            "firing {:.1} at ({:.0}, {:.0}), gun turn {:.3}",
            solution.power,
            solution.prediction.position.x,
            solution.prediction.position.y,
            solution.gun_turn
        );
        host.set_turn_gun_right(solution.gun_turn);
        host.set_fire(solution.power);
    }

    fn orbit<H: Host>(&mut self, host: &mut H, target: &Observation) {
        let own = host.own_state();
        let power = bullet_power(own.energy, &self.config);
        host.set_turn_gun_right(displacement_lead(&own, target, power));
        host.set_turn_right(normal_relative_angle(
            target.bearing + self.config.orbit_offset_degrees.to_radians(),
        ));
        if self.state.forward {
            host.set_ahead(self.config.orbit_distance);
        }
        host.set_fire(power);
        host.set_turn_radar_right(orbit_turn(&own, target));
        host.scan();
    }

    fn on_hit_robot<H: Host>(&mut self, host: &mut H, hit: &HitRobot) {
        if hit.my_fault {
            self.reverse(host);
        }
    }

    fn reverse<H: Host>(&mut self, host: &mut H) {
        reverse(host, &mut self.state.forward, self.state.walk);
    }
}
