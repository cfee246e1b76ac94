//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core, input, term, types}`
//! and hosts the pieces that only the binary needs: environment configuration
//! and the JSON-lines event log.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;

pub use config::Config;
pub use event_log::{EventLog, LogRecord};
