//! Difficulty & scoring controller.
//!
//! Sole writer of the scroll velocity during play. A milestone raises the
//! velocity, rewrites it on every live floor segment and obstacle, and opens
//! a flash window during which the score holds still.

use crate::consts::*;
use crate::entities::{FloorSegment, GameEvent, GameState, Obstacle, ScoreFlash};

/// Advance an open flash window by one tick. The readout toggles every
/// `FLASH_INTERVAL` counts; the window closes once the counter passes
/// `FLASH_DURATION`.
pub fn step_flash(flash: &ScoreFlash) -> ScoreFlash {
    if !flash.active {
        return flash.clone();
    }

    let counter = flash.counter + 1;
    if counter > FLASH_DURATION {
        return ScoreFlash {
            active: false,
            counter: 0,
            visible: flash.visible,
        };
    }

    let toggle = counter % FLASH_INTERVAL == 0;
    ScoreFlash {
        active: true,
        counter,
        visible: flash.visible != toggle,
    }
}

/// The milestone reached by `points` that has not yet been acted on.
pub fn milestone_due(points: u32, last_milestone: u32) -> Option<u32> {
    let reached = (points / MILESTONE) * MILESTONE;
    (reached > last_milestone).then_some(reached)
}

/// Rewrite the scroll velocity on every live floor segment and obstacle.
pub fn broadcast_velocity(velocity: f32, floor: &mut [FloorSegment], obstacles: &mut [Obstacle]) {
    for segment in floor.iter_mut() {
        segment.velocity = velocity;
    }
    for obstacle in obstacles.iter_mut() {
        obstacle.velocity = velocity;
    }
}

/// Run one tick of the controller: flash timing, milestone ramp, then score
/// accumulation. The flash keeps blinking after game over but the score
/// does not move.
pub fn update(state: &mut GameState) {
    state.flash = step_flash(&state.flash);

    if let Some(milestone) = milestone_due(state.display_score(), state.last_milestone) {
        state.last_milestone = milestone;
        state.velocity += VELOCITY_STEP;
        broadcast_velocity(state.velocity, &mut state.floor, &mut state.obstacles);
        state.flash = ScoreFlash {
            active: true,
            counter: 0,
            visible: state.flash.visible,
        };
        state.events.push(GameEvent::Milestone(milestone));
    }

    if state.is_game_over() {
        return;
    }

    if !state.flash.active {
        state.score_ticks += 1;
    }
}
