//! Events delivered by the host engine.
//!
//! Angles are radians; bearings are relative to the robot's own heading.

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRobot {
    pub name: String,
    pub bearing: f64,
    pub distance: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub time: u64,
}
impl ScannedRobot {
    /// False if the engine handed us a reading we can't do geometry with.
    pub fn is_finite(&self) -> bool {
        self.bearing.is_finite()
            && self.distance.is_finite()
            && self.heading.is_finite()
            && self.velocity.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitWall {
    pub bearing: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitRobot {
    pub name: String,
    pub bearing: f64,
    pub energy: f64,
    /// Set when we rammed them rather than the other way around.
    pub my_fault: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitByBullet {
    pub name: String,
    pub bearing: f64,
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletHit {
    pub victim: String,
    pub energy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ScannedRobot(ScannedRobot),
    HitWall(HitWall),
    HitRobot(HitRobot),
    HitByBullet(HitByBullet),
    BulletHit(BulletHit),
    BulletMissed,
    RoundEnded,
}
