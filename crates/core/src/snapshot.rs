#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pieces::Piece;
use crate::types::{
    Cell, Color, GameMode, PieceKind, ShapeMatrix, GRID_HEIGHT, GRID_WIDTH, SHAPE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub mode: GameMode,
    pub paused: bool,
    pub game_over: bool,
    pub help_open: bool,
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval: f64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.mode == GameMode::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let empty = PieceSnapshot {
            kind: PieceKind::I,
            shape: [[false; SHAPE_SIZE]; SHAPE_SIZE],
            x: 0,
            y: 0,
        };
        Self {
            board: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            current: empty,
            next: empty,
            mode: GameMode::Playing,
            paused: false,
            game_over: false,
            help_open: false,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval: 0.0,
        }
    }
}
