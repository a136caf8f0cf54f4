#![allow(dead_code)]

use no_mercy::{Adjustments, Arena, ColorScheme, Host, OwnState};
use oort_api::prelude::vec2;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Ahead(f64),
    Back(f64),
    TurnRight(f64),
    TurnGunRight(f64),
    TurnRadarRight(f64),
    Fire(f64),
    Colors(ColorScheme),
    Adjust(Adjustments),
    Scan,
}

/// Host double that records every command and ends the round after
/// `turns_left` executes.
pub struct RecordingHost {
    pub own: OwnState,
    pub arena: Arena,
    pub radar_turn_remaining: f64,
    pub commands: Vec<Command>,
    pub executed: usize,
    pub turns_left: usize,
}
impl RecordingHost {
    pub fn new(x: f64, y: f64) -> RecordingHost {
        RecordingHost {
            own: OwnState {
                position: vec2(x, y),
                heading: 0.0,
                gun_heading: 0.0,
                radar_heading: 0.0,
                energy: 100.0,
            },
            arena: Arena::new(800.0, 600.0),
            radar_turn_remaining: 0.0,
            commands: Vec::new(),
            executed: 0,
            turns_left: 1,
        }
    }

    pub fn fired(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Fire(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn last_gun_turn(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::TurnGunRight(a) => Some(*a),
            _ => None,
        })
    }

    pub fn last_radar_turn(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::TurnRadarRight(a) => Some(*a),
            _ => None,
        })
    }

    pub fn last_move(&self) -> Option<Command> {
        self.commands
            .iter()
            .rev()
            .find(|c| matches!(c, Command::Ahead(_) | Command::Back(_)))
            .cloned()
    }
}

impl Host for RecordingHost {
    fn own_state(&self) -> OwnState {
        self.own
    }

    fn arena(&self) -> Arena {
        self.arena
    }

    fn radar_turn_remaining(&self) -> f64 {
        self.radar_turn_remaining
    }

    fn set_ahead(&mut self, distance: f64) {
        self.commands.push(Command::Ahead(distance));
    }

    fn set_back(&mut self, distance: f64) {
        self.commands.push(Command::Back(distance));
    }

    fn set_turn_right(&mut self, angle: f64) {
        self.commands.push(Command::TurnRight(angle));
    }

    fn set_turn_gun_right(&mut self, angle: f64) {
        self.commands.push(Command::TurnGunRight(angle));
    }

    fn set_turn_radar_right(&mut self, angle: f64) {
        self.commands.push(Command::TurnRadarRight(angle));
    }

    fn set_fire(&mut self, power: f64) {
        self.commands.push(Command::Fire(power));
    }

    fn set_colors(&mut self, colors: &ColorScheme) {
        self.commands.push(Command::Colors(*colors));
    }

    fn set_adjustments(&mut self, adjustments: Adjustments) {
        self.commands.push(Command::Adjust(adjustments));
    }

    fn scan(&mut self) {
        self.commands.push(Command::Scan);
    }

    fn execute(&mut self) -> bool {
        self.executed += 1;
        self.turns_left = self.turns_left.saturating_sub(1);
        self.turns_left > 0
    }
}
