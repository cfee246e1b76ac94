//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and turns the stream of
//! press/repeat/release events into edge-triggered actions: each physical
//! press produces exactly one action, no matter how long the key is held.
//!
//! Terminals that never report key releases are handled with a timeout.

pub mod handler;
pub mod latch;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use latch::{ActionLatch, ActionSet};
pub use map::{action_for_key, should_quit};
