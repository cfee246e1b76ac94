//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be shared by the engine,
//! the input layer and the terminal renderer alike.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (`GRID_WIDTH / 2 - 2`, 0) = (5, 0)
//!
//! # Gravity
//!
//! | Level | Fall interval |
//! |-------|---------------|
//! | 1 | 1.000s |
//! | 2 | 0.909s |
//! | 3 | 0.833s |
//! | n | 1.0 / (1 + (n - 1) * 0.1) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//! assert_eq!(piece.shape()[2], [true, true, true, false]);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(GRID_WIDTH, 15);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Playfield width in cells (15 columns)
pub const GRID_WIDTH: u8 = 15;

/// Playfield height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Side length of every piece matrix
pub const SHAPE_SIZE: usize = 4;

/// Spawn column of a new piece's matrix origin
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8 - 2;

/// Spawn row of a new piece's matrix origin
pub const SPAWN_Y: i8 = 0;

/// Seconds between automatic descents at level 1
pub const BASE_FALL_INTERVAL_SECS: f64 = 1.0;

/// Per-level speedup used by the fall interval formula
pub const FALL_SPEEDUP_PER_LEVEL: f64 = 0.1;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base scores for 1..=4 simultaneous lines (multiplied by level)
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Offsets tried, in order, when a rotation collides at its own position.
///
/// Shape- and orientation-agnostic: the same five offsets apply to every piece.
pub const KICK_OFFSETS: [(i8, i8); 5] = [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// 4x4 occupancy matrix, indexed `[row][col]`
pub type ShapeMatrix = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

const X: bool = true;
const O: bool = false;

const SHAPES: [ShapeMatrix; 7] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // O
    [[O, O, O, O], [O, X, X, O], [O, X, X, O], [O, O, O, O]],
    // T
    [[O, O, O, O], [O, X, O, O], [X, X, X, O], [O, O, O, O]],
    // S
    [[O, O, O, O], [O, X, X, O], [X, X, O, O], [O, O, O, O]],
    // Z
    [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
    // J
    [[O, O, O, O], [X, O, O, O], [X, X, X, O], [O, O, O, O]],
    // L
    [[O, O, O, O], [O, O, X, O], [X, X, X, O], [O, O, O, O]],
];

const COLORS: [Color; 7] = [
    Color::new(0.0, 1.0, 1.0),
    Color::new(1.0, 1.0, 0.0),
    Color::new(0.5, 0.0, 0.5),
    Color::new(0.0, 1.0, 0.0),
    Color::new(1.0, 0.0, 0.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(1.0, 0.5, 0.0),
];

/// Linear RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels (clamped)
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All variants, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into the shape/color tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical (spawn orientation) occupancy matrix
    pub const fn shape(self) -> ShapeMatrix {
        SHAPES[self as usize]
    }

    /// Display color
    pub const fn color(self) -> Color {
        COLORS[self as usize]
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Discrete, edge-triggered game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Help,
    CloseHelp,
    Restart,
}

impl GameAction {
    /// Number of distinct actions
    pub const COUNT: usize = 9;

    /// All actions, in index order
    pub const ALL: [GameAction; Self::COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Pause,
        GameAction::Help,
        GameAction::CloseHelp,
        GameAction::Restart,
    ];

    /// Dense index, used for per-action lookup tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "help" => Some(GameAction::Help),
            "closehelp" => Some(GameAction::CloseHelp),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Help => "help",
            GameAction::CloseHelp => "closeHelp",
            GameAction::Restart => "restart",
        }
    }
}

/// Mode that currently governs command interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameMode {
    Playing,
    Paused,
    GameOver,
    HelpOverlay,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Playing => "playing",
            GameMode::Paused => "paused",
            GameMode::GameOver => "game_over",
            GameMode::HelpOverlay => "help",
        }
    }
}

/// Playfield cell (None = empty, Some = occupied with that color)
pub type Cell = Option<Color>;

/// Outcome of committing one piece to the playfield.
///
/// Produced by the engine on every placement and held until taken by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub score: u32,
    pub level: u32,
    pub level_up: bool,
    /// The piece spawned after this placement was blocked.
    pub game_over: bool,
}
