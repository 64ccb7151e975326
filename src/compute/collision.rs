//! Collision detection, the game-over latch and the reset protocol.

use crate::consts::INITIAL_VELOCITY;
use crate::entities::{
    reset_control_rect, FloorSegment, GameEvent, GameState, GameStatus, Obstacle, Player,
    ScoreFlash,
};

use super::{player, scroll, TickInput};

/// First obstacle the player's box overlaps. Several simultaneous overlaps
/// still count as one hit.
pub fn first_hit<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let body = player.rect();
    obstacles.iter().find(|o| o.rect().overlaps(&body))
}

/// Latch game over: freezes the whole world through the clock, shows the
/// death sprite and reports the final score. No-op if already over.
pub fn latch_game_over(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    state.status = GameStatus::GameOver;
    state.player = player::kill(&state.player);
    state.events.push(GameEvent::GameOver {
        score: state.display_score(),
    });
}

/// Whether this tick's input asks to restart a finished run: the jump key
/// was released, or a pointer release landed on the reset control.
pub fn wants_reset(state: &GameState, input: &TickInput) -> bool {
    if !state.is_game_over() {
        return false;
    }

    let clicked = input
        .click
        .map(|(x, y)| reset_control_rect().contains(x, y))
        .unwrap_or(false);

    input.jump_released || clicked
}

/// Start a new run in place. Obstacles go, floor and clouds stay, and every
/// difficulty value returns to its initial setting. The high score and the
/// frame counter carry over.
pub fn reset_game(state: &GameState) -> GameState {
    let floor = state
        .floor
        .iter()
        .map(|s| FloorSegment {
            velocity: INITIAL_VELOCITY,
            ..s.clone()
        })
        .collect();

    let mut events = state.events.clone();
    events.push(GameEvent::Reset);

    GameState {
        player: Player::spawn(),
        floor: scroll::cover_floor(floor, INITIAL_VELOCITY),
        obstacles: Vec::new(),
        score_ticks: 0,
        last_milestone: 0,
        velocity: INITIAL_VELOCITY,
        flash: ScoreFlash::default(),
        status: GameStatus::Playing,
        events,
        ..state.clone()
    }
}
