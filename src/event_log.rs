//! JSON-lines event log.
//!
//! The terminal belongs to the game while it runs, so session events go to an
//! optional file instead: one `serde_json` object per line, tagged by `event`
//! and stamped with `t`, the seconds since the session started.
//!
//! ```text
//! {"event":"session_start","t":0.0,"seed":42}
//! {"event":"placement","t":3.2,"kind":"T","lines_cleared":1,"points":40,...}
//! {"event":"game_over","t":95.1,"score":1340,"level":2,"lines":14}
//! ```
//!
//! Logging never interrupts play: the first failed write disables the log.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::PlacementEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        t: f64,
        seed: u64,
    },
    Placement {
        t: f64,
        #[serde(flatten)]
        placement: PlacementEvent,
    },
    GameOver {
        t: f64,
        score: u32,
        level: u32,
        lines: u32,
    },
    Restart {
        t: f64,
    },
    SessionEnd {
        t: f64,
        score: u32,
        level: u32,
        lines: u32,
    },
}

/// Append-only JSON-lines writer. A disabled log accepts and drops records.
#[derive(Debug, Default)]
pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open (or create) `path` for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// Open `path` if given, otherwise return a disabled log.
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::disabled()), Self::open)
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            if file.flush().is_err() {
                self.file = None;
            }
        }
    }
}
