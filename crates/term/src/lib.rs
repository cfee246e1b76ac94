//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! engine snapshots into a framebuffer of styled character cells which is then
//! flushed (full or diffed) to the terminal through crossterm.
//!
//! - `core` stays deterministic and I/O free
//! - the view is pure and unit-testable
//! - playfield cells are drawn 2 characters wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
