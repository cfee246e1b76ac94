//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameMode, GRID_HEIGHT, GRID_WIDTH, SHAPE_SIZE};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

const BLOCK: char = '█';

/// Key bindings shown in the help panel.
const HELP_LINES: [&str; 11] = [
    "CONTROLS",
    "",
    "Left / A    move left",
    "Right / D   move right",
    "Down / S    soft drop",
    "Space       hard drop",
    "Up / W      rotate",
    "P           pause",
    "R           restart",
    "Esc / H     close help",
    "Q           quit",
];

/// Hints shown under the side panel.
const KEY_HINTS: [&str; 3] = ["H  help", "P  pause", "Q  quit"];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen-space placement of the playfield frame for one render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_px_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', EMPTY);
        draw_border(fb, frame.x, frame.y, frame.w, frame.h, BORDER);

        // Landed cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                self.draw_board_cell(fb, frame, x as u16, y as u16, cell);
            }
        }

        // Active piece, only while playing; cells above the top edge are not drawn.
        if snap.playable() {
            for (x, y) in piece_cells(&snap.current) {
                if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
                    let color = Some(snap.current.color());
                    self.draw_board_cell(fb, frame, x as u16, y as u16, color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.mode {
            GameMode::HelpOverlay => draw_help_panel(fb, frame),
            GameMode::GameOver => {
                let mid = frame.y.saturating_add(frame.h / 2);
                draw_centered(fb, frame, mid, "GAME OVER", OVERLAY);
                draw_centered(fb, frame, mid.saturating_add(2), "R to restart", VALUE);
            }
            GameMode::Paused => {
                let mid = frame.y.saturating_add(frame.h / 2);
                draw_centered(fb, frame, mid, "PAUSED", OVERLAY);
            }
            GameMode::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, cell: Cell) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        match cell {
            Some(color) => {
                let style = CellStyle::new(Rgb::from(color), PLAY_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
            }
            None => fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', EMPTY),
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = frame.y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)]
        {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next);
        y = y.saturating_add(SHAPE_SIZE as u16 + 1);

        for hint in KEY_HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, VALUE.dim());
            y = y.saturating_add(1);
        }
    }

    /// Draw a piece matrix at a fixed screen position, ignoring its grid position.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
        let style = CellStyle::new(Rgb::from(piece.color()), SCREEN_BG).bold();
        for (row, cols) in piece.shape.iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if filled {
                    let px = x + col as u16 * self.cell_w;
                    let py = y + row as u16 * self.cell_h;
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
                }
            }
        }
    }
}

fn piece_cells(piece: &PieceSnapshot) -> impl Iterator<Item = (i8, i8)> + '_ {
    piece.shape.iter().enumerate().flat_map(move |(row, cols)| {
        cols.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (piece.x + col as i8, piece.y + row as i8))
    })
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

/// Boxed list of key bindings over the middle of the playfield.
fn draw_help_panel(fb: &mut FrameBuffer, frame: Frame) {
    let text_w = HELP_LINES
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0);
    let w = (text_w + 4).min(frame.w);
    let h = (HELP_LINES.len() as u16 + 2).min(frame.h);
    let x = frame.x + (frame.w - w) / 2;
    let y = frame.y + (frame.h - h) / 2;

    fb.fill_rect(x, y, w, h, ' ', VALUE);
    draw_border(fb, x, y, w, h, OVERLAY);

    for (i, line) in HELP_LINES.iter().enumerate() {
        let style = if i == 0 { OVERLAY } else { VALUE };
        fb.put_str(x + 2, y + 1 + i as u16, line, style);
    }
}
