//! Fixed tuning constants.
//!
//! Every velocity and acceleration is expressed in logical units per tick at
//! `TICKS_PER_SECOND`; none of them are per-second values.

// ── Surface & pacing ──────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 200.0;
pub const TICKS_PER_SECOND: u32 = 60;

// ── Floor ─────────────────────────────────────────────────────────────────────

pub const FLOOR_WIDTH: f32 = 1200.0;
pub const FLOOR_HEIGHT: f32 = 12.0;
/// Bottom-left corner of the very first floor segment.
pub const FLOOR_START_X: f32 = 90.0;
pub const FLOOR_BOTTOM: f32 = WINDOW_HEIGHT - 10.0;
pub const FLOOR_TOP: f32 = FLOOR_BOTTOM - FLOOR_HEIGHT;
/// Successor segments overlap their predecessor by this much.
pub const FLOOR_OVERLAP: f32 = 10.0;
/// Feet sink this far below the floor's top edge when standing.
pub const FOOT_SINK: f32 = 20.0;
/// y of every grounded bottom edge (player and cacti).
pub const GROUND_LINE: f32 = FLOOR_TOP + FOOT_SINK;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = FLOOR_START_X;
pub const PLAYER_START_Y: f32 = GROUND_LINE;
pub const PLAYER_WIDTH: f32 = 56.0;
pub const PLAYER_HEIGHT: f32 = 62.0;
pub const PLAYER_DUCK_WIDTH: f32 = 86.0;
pub const PLAYER_DUCK_HEIGHT: f32 = 42.0;
pub const GRAVITY: f32 = 2.0;
pub const JUMP_SPEED: f32 = 25.0;

/// Animation cursor values. The run cycle walks 1.0 → 2.5 in half steps.
pub const FRAME_RUN_FIRST: f32 = 1.0;
pub const FRAME_RUN_LAST: f32 = 2.0;
pub const FRAME_RUN_STEP: f32 = 0.5;
pub const FRAME_JUMP: f32 = 3.0;
pub const FRAME_DUCK_FIRST: f32 = 4.0;
pub const FRAME_DUCK_LAST: f32 = 5.0;
/// Sentinel selecting the death sprite.
pub const FRAME_DEAD: f32 = -1.0;

// ── Obstacles ─────────────────────────────────────────────────────────────────

pub const OBSTACLE_SPAWN_X: f32 = WINDOW_WIDTH + 50.0;
/// A new obstacle may only appear once every live one is at or left of this x.
pub const SPAWN_GATE_X: f32 = 100.0;
/// Above this score flyers join the obstacle mix.
pub const FLYER_SCORE: f64 = 500.0;
pub const CACTUS_SIZES: [f32; 2] = [32.0, 64.0];
pub const FLYER_WIDTH: f32 = 60.0;
pub const FLYER_HEIGHT: f32 = 36.0;
/// Bottom edges a flyer may cruise at.
pub const FLYER_ALTITUDES: [f32; 3] = [FLOOR_TOP, 115.0, 140.0];

// ── Clouds ────────────────────────────────────────────────────────────────────

pub const CLOUD_WIDTH: f32 = 92.0;
pub const CLOUD_HEIGHT: f32 = 27.0;
pub const CLOUD_SPAWN_X: f32 = WINDOW_WIDTH + 1.0;
/// Once the newest cloud's left edge reaches this x, the next one appears.
pub const CLOUD_RESPAWN_X: f32 = 301.0;
pub const CLOUD_VELOCITY: f32 = 2.0;
pub const CLOUD_ALTITUDES: [f32; 3] = [20.0, 50.0, 70.0];

// ── Difficulty & scoring ──────────────────────────────────────────────────────

pub const INITIAL_VELOCITY: f32 = 8.0;
pub const VELOCITY_STEP: f32 = 0.5;
/// Scoring ticks per whole point; the score grows by 0.2 per tick.
pub const TICKS_PER_POINT: u64 = 5;
pub const SCORE_PER_TICK: f64 = 1.0 / TICKS_PER_POINT as f64;
pub const MILESTONE: u32 = 100;
/// The flash window closes once its counter exceeds this.
pub const FLASH_DURATION: u32 = 35;
/// The score readout toggles every this many flash counts.
pub const FLASH_INTERVAL: u32 = 5;
pub const SCORE_DIGITS: usize = 6;

// ── Game-over overlay ─────────────────────────────────────────────────────────

pub const RESET_CONTROL_WIDTH: f32 = 72.0;
pub const RESET_CONTROL_HEIGHT: f32 = 64.0;
pub const RESET_CONTROL_CENTER: (f32, f32) = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 + 30.0);
pub const GAME_OVER_BANNER_CENTER: (f32, f32) = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - 30.0);

// ── Terminal viewport ─────────────────────────────────────────────────────────

/// Logical units covered by one terminal cell.
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 10.0;
pub const FIELD_COLS: u16 = (WINDOW_WIDTH / CELL_WIDTH) as u16;
pub const FIELD_ROWS: u16 = (WINDOW_HEIGHT / CELL_HEIGHT) as u16;
/// Terminal row showing logical y = 0. Row 0 holds the HUD.
pub const FIELD_TOP_ROW: u16 = 1;
/// HUD row, play field, controls hint.
pub const MIN_TERMINAL_ROWS: u16 = FIELD_TOP_ROW + FIELD_ROWS + 1;
