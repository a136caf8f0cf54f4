use crate::config::MAX_HISTORY_CAPACITY;
use crate::event::ScannedRobot;
use crate::host::OwnState;
use crate::utils::{normal_absolute_angle, VecUtils};
use oort_api::prelude::*;
use std::collections::VecDeque;

/// One scan of the enemy, resolved to arena coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub position: Vec2,
    pub heading: f64,
    pub velocity: f64,
    pub distance: f64,
    /// Relative to our heading at scan time.
    pub bearing: f64,
    /// Our heading plus `bearing`, in [0, TAU).
    pub absolute_bearing: f64,
    pub energy: f64,
    pub time: u64,
}
impl Observation {
    pub fn from_scan(own: &OwnState, scan: &ScannedRobot) -> Observation {
        let absolute_bearing = normal_absolute_angle(own.heading + scan.bearing);
        Observation {
            position: own.position + Vec2::compass(absolute_bearing, scan.distance),
            heading: scan.heading,
            velocity: scan.velocity,
            distance: scan.distance,
            bearing: scan.bearing,
            absolute_bearing,
            energy: scan.energy,
            time: scan.time,
        }
    }
}

/// The most recent observations of the scanned robot, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetHistory {
    samples: VecDeque<Observation>,
    capacity: usize,
}
impl TargetHistory {
    /// `capacity` is kept within [2, MAX_HISTORY_CAPACITY] so a heading delta
    /// is always computable. Storage grows as scans arrive.
    pub fn new(capacity: usize) -> TargetHistory {
        TargetHistory {
            samples: VecDeque::new(),
            capacity: capacity.clamp(2, MAX_HISTORY_CAPACITY),
        }
    }

    pub fn record(&mut self, observation: Observation) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(observation);
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.samples.back()
    }

    pub fn previous(&self) -> Option<&Observation> {
        self.samples.iter().rev().nth(1)
    }

    /// Heading change between the last two scans, or 0 if there's only one.
    pub fn heading_delta(&self) -> f64 {
        match (self.latest(), self.previous()) {
            (Some(latest), Some(previous)) => angle_diff(previous.heading, latest.heading),
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
