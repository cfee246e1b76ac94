//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on input devices, terminals, or any other I/O:
//!
//! - **Deterministic**: the same seed and the same command/timestamp sequence
//!   produce the same game
//! - **Clock-free**: callers supply timestamps to [`GameState::update`]
//! - **Single-owner**: commands mutate in place, reads are plain accessors
//!
//! # Module Structure
//!
//! - [`board`]: 15x20 playfield with collision detection and line clearing
//! - [`game_state`]: active piece, lookahead, mode state machine and gravity clock
//! - [`pieces`]: piece instances, matrix rotation and kick resolution
//! - [`rng`]: uniform seeded piece generation
//! - [`scoring`]: line scores, levels and fall intervals
//! - [`snapshot`]: copyable view of a frame for renderers
//!
//! # Rules
//!
//! - Pieces are drawn uniformly at random; repeats are allowed.
//! - Rotation is clockwise only. A blocked rotation tries, in order, the offsets
//!   (-1,0), (1,0), (0,-1), (-1,-1), (1,-1).
//! - There is no lock delay: a piece that cannot fall when gravity fires is placed.
//! - Hard drop places immediately. Soft drop only moves down.
//! - 1/2/3/4 lines score 40/100/300/1200 times the level; drops score nothing.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, GameMode};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.mode(), GameMode::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! let event = game.take_last_event().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! assert_eq!(game.score(), 0);
//!
//! // One second later gravity moves the new piece down a row.
//! let y = game.current_piece().y;
//! assert!(game.update(1.0));
//! assert_eq!(game.current_piece().y, y + 1);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Playfield;
pub use game_state::GameState;
pub use pieces::{rotate_cw, try_rotate, Piece};
pub use rng::PieceGenerator;
pub use scoring::{calculate_level, calculate_line_score, fall_interval_secs, ScoreResult, ScoreState};
pub use snapshot::{GameSnapshot, PieceSnapshot};
