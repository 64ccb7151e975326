//! Runtime configuration, resolved once at startup from the environment.
//!
//! Only file locations are configurable; gameplay tuning is fixed in
//! [`crate::consts`]. The log filter comes from `RUST_LOG` via env_logger.

use std::path::PathBuf;

use crate::error::GameError;

pub const SCORE_FILE_VAR: &str = "DINO_RUN_SCORE_FILE";
pub const LOG_FILE_VAR: &str = "DINO_RUN_LOG_FILE";

const DEFAULT_SCORE_FILE: &str = ".dino_run_score";
const DEFAULT_LOG_FILE: &str = ".dino_run.log";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub score_file: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve with an arbitrary variable source. Defaults live in `$HOME`,
    /// or the working directory when `HOME` is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GameError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = PathBuf::from(lookup("HOME").unwrap_or_else(|| ".".to_string()));

        let resolve = |var: &str, default: &str| -> Result<PathBuf, GameError> {
            match lookup(var) {
                Some(value) if value.trim().is_empty() => {
                    Err(GameError::Config(format!("{var} is set but empty")))
                }
                Some(value) => Ok(PathBuf::from(value)),
                None => Ok(home.join(default)),
            }
        };

        Ok(Config {
            score_file: resolve(SCORE_FILE_VAR, DEFAULT_SCORE_FILE)?,
            log_file: resolve(LOG_FILE_VAR, DEFAULT_LOG_FILE)?,
        })
    }
}
