//! Pure game-logic functions.
//!
//! `tick` takes an immutable reference to the current `GameState` plus the
//! input sampled for this tick, and returns a brand-new `GameState`. Side
//! effects are limited to the injected RNG.
//!
//! Phase order inside a tick is part of the contract:
//!
//! 1. input: a pending reset is applied before anything moves
//! 2. scroll: floor, clouds, obstacles (clock sampled at tick start)
//! 3. scoring: flash window, milestone ramp, score accumulation
//! 4. spawn: at most one new obstacle, gated by spacing
//! 5. collide: may latch game over
//! 6. player: gravity, pose, jump (clock re-sampled after phase 5)

pub mod collision;
pub mod kinematics;
pub mod player;
pub mod scoring;
pub mod scroll;
pub mod spawner;

use rand::Rng;

use crate::consts::{FLOOR_START_X, INITIAL_VELOCITY};
use crate::entities::{FloorSegment, GameEvent, GameState, GameStatus, Player, ScoreFlash};

pub use collision::{reset_game, wants_reset};

/// Everything the frame driver samples from the player for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// A jump key (Space or Up) is held.
    pub jump: bool,
    /// The duck key is held.
    pub duck: bool,
    /// A jump key went up since the previous tick.
    pub jump_released: bool,
    /// Pointer release position in logical coordinates.
    pub click: Option<(f32, f32)>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh process: one floor segment under the player,
/// one cloud entering from the right, no obstacles.
pub fn init_state(high_score: u32, rng: &mut impl Rng) -> GameState {
    let floor = scroll::cover_floor(
        vec![FloorSegment {
            x: FLOOR_START_X,
            velocity: INITIAL_VELOCITY,
        }],
        INITIAL_VELOCITY,
    );

    GameState {
        player: Player::spawn(),
        floor,
        clouds: vec![scroll::new_cloud(rng)],
        obstacles: Vec::new(),
        score_ticks: 0,
        last_milestone: 0,
        velocity: INITIAL_VELOCITY,
        flash: ScoreFlash::default(),
        status: GameStatus::Playing,
        high_score,
        autospawn: true,
        frame: 0,
        events: Vec::new(),
    }
}

// ── Per-frame tick (RNG injected) ────────────────────────────────────────

/// Advance the simulation by one tick.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    let mut next = GameState {
        events: Vec::new(),
        frame: state.frame + 1,
        ..state.clone()
    };

    // ── 1. Input ─────────────────────────────────────────────────────────────
    if wants_reset(&next, input) {
        next = reset_game(&next);
    }

    // ── 2. Scrolling entities ────────────────────────────────────────────────
    let clock = next.clock();
    next.floor = scroll::scroll_floor(&next.floor, next.velocity, clock);
    next.clouds = scroll::scroll_clouds(&next.clouds, clock, rng);
    next.obstacles = scroll::scroll_obstacles(&next.obstacles, clock);

    // ── 3. Difficulty & score ────────────────────────────────────────────────
    scoring::update(&mut next);

    // ── 4. Spawner ───────────────────────────────────────────────────────────
    if next.status == GameStatus::Playing && next.autospawn {
        if let Some(obstacle) = spawner::spawn(&next.obstacles, next.score(), next.velocity, rng) {
            log::debug!("spawned {:?} at score {:.1}", obstacle.kind, next.score());
            next.obstacles.push(obstacle);
            next.events.push(GameEvent::ObstacleSpawned);
        }
    }

    // ── 5. Collision ─────────────────────────────────────────────────────────
    if next.status == GameStatus::Playing
        && collision::first_hit(&next.player, &next.obstacles).is_some()
    {
        collision::latch_game_over(&mut next);
    }

    // ── 6. Player ────────────────────────────────────────────────────────────
    next.player = player::update(&next.player, &next.floor, input.jump, input.duck, next.clock());

    log::trace!(
        "tick {} score {:.1} y {:.1} v {:.1} {:?}",
        next.frame,
        next.score(),
        next.player.y,
        next.player.velocity,
        next.player.state
    );

    next
}
