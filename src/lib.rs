//! NoMercy: a tank robot that shoots where its opponent is going to be.
//!
//! The engine drives the robot through [`Host`]: it calls [`NoMercy::run`]
//! once per round and forwards each [`Event`] to [`NoMercy::on_event`]. On
//! every scan the robot records the opponent in a short history, steps it
//! forward along its current heading and turn rate until a bullet could reach
//! it, and fires at that point.
pub mod aim;
pub mod config;
pub mod event;
pub mod host;
pub mod radar;
pub mod robot;
pub mod rules;
pub mod target;
pub mod utils;

pub use config::{ColorScheme, ConfigError, RobotConfig, Targeting};
pub use event::Event;
pub use host::{Adjustments, Arena, Host, OwnState};
pub use robot::{NoMercy, RobotState};
