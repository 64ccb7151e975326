//! Dino Run - a side-scrolling jump-and-duck reflex game.
//!
//! Core modules:
//! - `compute`: tick-driven simulation (kinematics, scrolling, spawning,
//!   scoring, collisions)
//! - `entities`: plain game data
//! - `highscore`: durable best score
//! - `input`: terminal events → per-tick input
//!
//! Rendering and the 60 Hz frame loop live in the binary.

pub mod compute;
pub mod config;
pub mod consts;
pub mod entities;
pub mod error;
pub mod highscore;
pub mod input;

pub use compute::{init_state, tick, TickInput};
pub use error::GameError;
