//! Vertical kinematics of the player body.
//!
//! Semi-implicit Euler under constant gravity, with the floor as the only
//! thing the body can land on. There is no horizontal motion.

use crate::consts::{FOOT_SINK, GRAVITY, JUMP_SPEED};
use crate::entities::{Clock, FloorSegment, Player, Rect};

/// First floor segment overlapping `rect`, if any.
pub fn floor_contact<'a>(rect: &Rect, floor: &'a [FloorSegment]) -> Option<&'a FloorSegment> {
    floor.iter().find(|segment| segment.rect().overlaps(rect))
}

pub fn is_grounded(player: &Player, floor: &[FloorSegment]) -> bool {
    floor_contact(&player.rect(), floor).is_some()
}

/// Advance one tick of gravity. A downward-moving body that ends up
/// overlapping the floor is snapped onto it and stopped.
pub fn integrate(player: &Player, floor: &[FloorSegment], clock: Clock) -> Player {
    if !clock.is_running() {
        return player.clone();
    }

    let velocity = player.velocity + GRAVITY;
    let mut next = Player {
        y: player.y + velocity + 0.5 * GRAVITY,
        velocity,
        last_velocity: player.velocity,
        ..player.clone()
    };

    if next.velocity > 0.0 {
        if let Some(segment) = floor_contact(&next.rect(), floor) {
            next.y = segment.rect().top() + FOOT_SINK;
            next.velocity = 0.0;
        }
    }

    next
}

/// Launch upward if `jump` is held and the body is standing on the floor.
/// Airborne requests are ignored.
pub fn try_jump(player: &Player, floor: &[FloorSegment], jump: bool) -> Player {
    if jump && is_grounded(player, floor) {
        Player {
            velocity: -JUMP_SPEED,
            ..player.clone()
        }
    } else {
        player.clone()
    }
}
