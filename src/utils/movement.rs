use log::debug;
use oort_api::prelude::Vec2;

use crate::host::{Arena, Host};

/// How far we ask to drive each turn: far enough that we never stop on our own.
pub fn default_walk(arena: &Arena) -> f64 {
    arena.width.max(arena.height)
}

pub fn near_wall(position: Vec2, arena: &Arena, margin: f64) -> bool {
    let near_x = position.x <= margin || position.x > arena.width - margin;
    let near_y = position.y <= margin || position.y > arena.height - margin;
    near_x || near_y
}

/// Backs off when inside the wall margin, otherwise keeps driving ahead.
pub fn keep_off_walls<H: Host>(host: &mut H, margin: f64, walk: f64) {
    if near_wall(host.own_state().position, &host.arena(), margin) {
        host.set_back(walk);
    } else {
        host.set_ahead(walk);
    }
}

/// Drives the opposite way from the last reversal and flips `forward`.
pub fn reverse<H: Host>(host: &mut H, forward: &mut bool, walk: f64) {
    if *forward {
        host.set_back(walk);
    } else {
        host.set_ahead(walk);
    }
    *forward = !*forward;
    debug!("reversed, forward={}", *forward);
}

#[cfg(test)]
mod test {
    use super::*;
    use oort_api::prelude::vec2;
    use test_log::test;

    #[test]
    fn test_default_walk() {
        assert_eq!(default_walk(&Arena::new(800.0, 600.0)), 800.0);
        assert_eq!(default_walk(&Arena::new(400.0, 1200.0)), 1200.0);
    }

    #[test]
    fn test_near_wall() {
        let arena = Arena::new(800.0, 600.0);
        assert!(!near_wall(vec2(400.0, 300.0), &arena, 50.0));
        assert!(near_wall(vec2(50.0, 300.0), &arena, 50.0));
        assert!(!near_wall(vec2(750.0, 300.0), &arena, 50.0));
        assert!(near_wall(vec2(750.1, 300.0), &arena, 50.0));
        assert!(near_wall(vec2(400.0, 20.0), &arena, 50.0));
        assert!(near_wall(vec2(400.0, 560.0), &arena, 50.0));
    }
}
