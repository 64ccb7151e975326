//! Player state machine and sprite cycling.

use crate::consts::*;
use crate::entities::{Clock, FloorSegment, Player, PlayerState};

use super::kinematics;

/// Pick the pose for the velocity pair just produced by `integrate`.
///
/// Two consecutive non-zero velocities mean airborne; two consecutive zero
/// velocities mean grounded, where the duck key decides. The single mixed
/// tick on takeoff or landing keeps the previous pose.
pub fn resolve_state(player: &Player, duck: bool) -> PlayerState {
    let airborne = player.velocity != 0.0 && player.last_velocity != 0.0;
    let settled = player.velocity == 0.0 && player.last_velocity == 0.0;

    if airborne {
        PlayerState::Jumping
    } else if settled && duck {
        PlayerState::Ducking
    } else if settled {
        PlayerState::Running
    } else {
        player.state
    }
}

/// Move the animation cursor one tick along the cycle for `state`.
pub fn advance_frame(state: PlayerState, frame: f32) -> f32 {
    match state {
        PlayerState::Running => {
            if frame > FRAME_RUN_LAST {
                FRAME_RUN_FIRST
            } else {
                frame + FRAME_RUN_STEP
            }
        }
        PlayerState::Jumping => FRAME_JUMP,
        PlayerState::Ducking => {
            let next = frame + 1.0;
            if !(FRAME_DUCK_FIRST..=FRAME_DUCK_LAST).contains(&next) {
                FRAME_DUCK_FIRST
            } else {
                next
            }
        }
        PlayerState::Static => frame,
        PlayerState::Dead => FRAME_DEAD,
    }
}

pub fn animate(player: &Player, duck: bool) -> Player {
    let state = resolve_state(player, duck);
    Player {
        state,
        frame: advance_frame(state, player.frame),
        ..player.clone()
    }
}

/// Force the death pose. It stays put until the next reset.
pub fn kill(player: &Player) -> Player {
    Player {
        state: PlayerState::Dead,
        frame: FRAME_DEAD,
        ..player.clone()
    }
}

/// Full per-tick player update: gravity, then pose, then jump trigger.
pub fn update(
    player: &Player,
    floor: &[FloorSegment],
    jump: bool,
    duck: bool,
    clock: Clock,
) -> Player {
    if !clock.is_running() || !player.is_alive() {
        return player.clone();
    }

    let moved = kinematics::integrate(player, floor, clock);
    let posed = animate(&moved, duck);
    kinematics::try_jump(&posed, floor, jump)
}
