//! Edge-triggered input handler for terminal environments.
//!
//! Key events update a held-set; once per frame [`InputHandler::frame`] turns
//! that held-set into rising edges through an [`ActionLatch`]. Holding a key
//! never repeats its action.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key whose last press/repeat is older than the timeout counts as released.
//! Once a release event has been seen the timeout is no longer applied.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::latch::{ActionLatch, ActionSet};
use crate::map::action_for_key;
use crate::types::GameAction;

// Must exceed the terminal's initial auto-repeat delay, or a held key fires
// again when the repeats start.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 700;

/// Tracks held keys and turns them into one action per press.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Time of the last press/repeat for each held action.
    held_since: [Option<Instant>; GameAction::COUNT],
    /// New presses seen since the last frame, kept even if released before it.
    pressed: [bool; GameAction::COUNT],
    /// The terminal sends release events.
    releases_reported: bool,
    latch: ActionLatch,
    key_release_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held_since: [None; GameAction::COUNT],
            pressed: [false; GameAction::COUNT],
            releases_reported: false,
            latch: ActionLatch::new(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn releases_reported(&self) -> bool {
        self.releases_reported
    }

    /// Record a key event. Returns the action the key maps to, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        let action = action_for_key(key.code)?;
        let i = action.index();

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                // With releases reported, repeats arrive as `Repeat`; a `Press`
                // on a held key means its release was lost.
                let missed_release = self.releases_reported
                    && key.kind == KeyEventKind::Press
                    && self.held_since[i].is_some();
                if self.held_since[i].is_none() || missed_release {
                    self.pressed[i] = true;
                }
                self.held_since[i] = Some(now);
            }
            KeyEventKind::Release => {
                self.releases_reported = true;
                self.held_since[i] = None;
            }
        }
        Some(action)
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held_since[action.index()].is_some()
    }

    /// Close the current frame and return the actions that fired during it.
    pub fn frame(&mut self, now: Instant) -> ActionSet {
        // Auto-release when terminal does not emit release events.
        if !self.releases_reported {
            for slot in self.held_since.iter_mut() {
                if let Some(t) = *slot {
                    if now.saturating_duration_since(t) > self.key_release_timeout {
                        *slot = None;
                    }
                }
            }
        }

        let mut level = [false; GameAction::COUNT];
        for (i, held) in level.iter_mut().enumerate() {
            *held = self.held_since[i].is_some() || self.pressed[i];
        }
        let fired = self.latch.latch(&level, &self.pressed);
        self.pressed = [false; GameAction::COUNT];
        fired
    }

    /// Forget held keys. Whether the terminal reports releases is kept.
    pub fn reset(&mut self) {
        self.held_since = [None; GameAction::COUNT];
        self.pressed = [false; GameAction::COUNT];
        self.latch.reset();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
