//! Board module - manages the playfield grid
//!
//! The playfield is a 15x20 grid where each cell is either empty or occupied
//! with the color of the piece that landed there.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..14 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the top (y < 0) exist only transiently for a spawning piece and are
//! never stored.

use crate::pieces::Piece;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// Total number of cells on the playfield
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// The playfield - 15 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Test a piece shifted by (dx, dy) against the walls, the floor and landed cells.
    ///
    /// Cells above the top edge only collide with the side walls, so a piece may
    /// sit partially above the visible area.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.cells().any(|(px, py)| {
            let x = px + dx;
            let y = py + dy;
            if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Merge a landed piece into the grid, copying its color.
    ///
    /// Cells above the top edge are dropped.
    pub fn place(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    /// Returns the number of rows removed (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= HEIGHT {
            return 0;
        }

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);

        1
    }

    /// Clear all full rows, scanning bottom to top, and return how many were removed.
    ///
    /// After a removal the same row index is examined again, since the row above
    /// has just been shifted into it.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                cleared += self.clear_row(y - 1) as u32;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of occupied cells in row `y`
    pub fn row_count(&self, y: usize) -> usize {
        if y >= HEIGHT {
            return 0;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire playfield
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Copy the grid into a fixed 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
