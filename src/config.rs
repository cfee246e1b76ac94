//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | piece generator seed (u64) | random |
//! | `BLOCKFALL_FRAME_MS` | frame period in milliseconds, clamped to 1..=1000 | 16 |
//! | `BLOCKFALL_LOG_PATH` | JSON-lines event log file | none |

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

pub const DEFAULT_FRAME_MS: u64 = 16;
const MIN_FRAME_MS: u64 = 1;
const MAX_FRAME_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// None means "pick a random seed".
    pub seed: Option<u64>,
    pub frame_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unset and blank variables fall back to defaults; values that do not
    /// parse are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var(ENV_SEED)
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("{ENV_SEED} must be an unsigned integer, got {s:?}"))
            })
            .transpose()?;

        let frame_ms = var(ENV_FRAME_MS)
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("{ENV_FRAME_MS} must be milliseconds, got {s:?}"))
            })
            .transpose()?
            .unwrap_or(DEFAULT_FRAME_MS)
            .clamp(MIN_FRAME_MS, MAX_FRAME_MS);

        let log_path = var(ENV_LOG_PATH).map(PathBuf::from);

        Ok(Self {
            seed,
            frame_ms,
            log_path,
        })
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
