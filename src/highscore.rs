//! High-score persistence.
//!
//! A single integer survives between runs. Storage problems never stop the
//! game: unreadable or corrupt storage counts as zero, failed writes are
//! logged and dropped.

use std::fs;
use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::entities::{GameEvent, GameState};

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("high score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored high score {content:?} is not an integer")]
    Parse {
        content: String,
        #[source]
        source: ParseIntError,
    },
}

/// Durable home of the high score.
pub trait ScoreStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&mut self) -> Result<Option<u32>, ScoreError>;
    fn write(&mut self, score: u32) -> Result<(), ScoreError>;
}

/// Parse stored text. Blank content is "nothing stored".
pub fn parse_score(content: &str) -> Result<Option<u32>, ScoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|source| ScoreError::Parse {
            content: trimmed.to_string(),
            source,
        })
}

// ── File-backed store ─────────────────────────────────────────────────────────

/// Plain-text file holding the decimal score. Each access opens and closes
/// the file.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&mut self) -> Result<Option<u32>, ScoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_score(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, score: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Store backed by a string, for tests and for running without a disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub content: Option<String>,
    /// Number of successful writes.
    pub writes: usize,
}

impl MemoryScoreStore {
    pub fn with_content(content: &str) -> Self {
        MemoryScoreStore {
            content: Some(content.to_string()),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&mut self) -> Result<Option<u32>, ScoreError> {
        match &self.content {
            Some(content) => parse_score(content),
            None => Ok(None),
        }
    }

    fn write(&mut self, score: u32) -> Result<(), ScoreError> {
        self.content = Some(score.to_string());
        self.writes += 1;
        Ok(())
    }
}

// ── Cached high score ─────────────────────────────────────────────────────────

/// In-memory copy of the best score. Storage is read when opened and again
/// right before each game-over comparison; nothing touches it per frame.
#[derive(Debug)]
pub struct HighScore<S: ScoreStore> {
    store: S,
    best: u32,
}

impl<S: ScoreStore> HighScore<S> {
    pub fn open(mut store: S) -> Self {
        let best = load_or_zero(&mut store);
        log::info!("high score loaded: {best}");
        HighScore { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compare a finished run against storage and overwrite only when the
    /// run is strictly better, or when storage holds zero. Returns whether
    /// a new record was set.
    pub fn record(&mut self, score: u32) -> bool {
        let stored = load_or_zero(&mut self.store);
        self.best = self.best.max(stored);

        if stored != 0 && score <= stored {
            return false;
        }

        match self.store.write(score) {
            Ok(()) => {
                self.best = self.best.max(score);
                if score > stored {
                    log::info!("new high score: {score} (was {stored})");
                }
                score > stored
            }
            Err(e) => {
                log::error!("could not save high score {score}: {e}");
                false
            }
        }
    }

    /// Persist any game over reported by the last tick and publish the
    /// current best to the HUD.
    pub fn observe(&mut self, state: &mut GameState) {
        for event in &state.events {
            if let GameEvent::GameOver { score } = event {
                self.record(*score);
            }
        }
        state.high_score = self.best;
    }
}

fn load_or_zero<S: ScoreStore>(store: &mut S) -> u32 {
    match store.read() {
        Ok(score) => score.unwrap_or(0),
        Err(e) => {
            log::warn!("ignoring unreadable high score: {e}");
            0
        }
    }
}
