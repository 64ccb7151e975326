//! Crate-level error type for startup and the frame driver.

use std::io;

use thiserror::Error;

/// Failures that end the process. Persistence problems never show up here;
/// see [`crate::highscore::ScoreError`].
#[derive(Error, Debug)]
pub enum GameError {
    /// Terminal setup, rendering or log-file I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// An environment override was present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The play field cannot be drawn in a terminal this small.
    #[error("terminal is {cols}x{rows}, need at least {need_cols}x{need_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        need_cols: u16,
        need_rows: u16,
    },
}
