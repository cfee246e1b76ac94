//! Game state module - manages the complete game state
//!
//! This module ties together all core components: playfield, pieces, piece
//! generation and scoring. It handles the gravity clock, piece movement,
//! rotation, placement and the mode state machine.
//!
//! The engine owns no clock: callers pass a monotonically increasing timestamp
//! (seconds) to [`GameState::update`] once per frame, and feed it discrete,
//! already edge-triggered commands.

use crate::board::Playfield;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceGenerator;
use crate::scoring::ScoreState;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, GameMode, PlacementEvent};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Playfield,
    current: Piece,
    /// Lookahead piece, already drawn but not yet active.
    next: Piece,
    generator: PieceGenerator,
    scoring: ScoreState,
    /// Timestamp of the last automatic descent (or placement).
    last_fall_time: f64,
    /// Last placement outcome (consumed by observers).
    last_event: Option<PlacementEvent>,
    paused: bool,
    game_over: bool,
    /// Modal overlay; gates dispatch without touching `paused` / `game_over`.
    help_open: bool,
}

impl GameState {
    /// Create a new game with the given generator seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let next = Piece::new(generator.draw());

        let mut state = Self {
            board: Playfield::new(),
            current: next,
            next,
            generator,
            scoring: ScoreState::new(),
            last_fall_time: 0.0,
            last_event: None,
            paused: false,
            game_over: false,
            help_open: false,
        };
        state.spawn_piece();
        state
    }

    /// Create a new game with a random seed
    pub fn from_entropy() -> Self {
        Self::new(PieceGenerator::from_entropy().seed())
    }

    pub fn mode(&self) -> GameMode {
        if self.help_open {
            GameMode::HelpOverlay
        } else if self.game_over {
            GameMode::GameOver
        } else if self.paused {
            GameMode::Paused
        } else {
            GameMode::Playing
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    /// Seconds between automatic descents at the current level
    pub fn fall_interval(&self) -> f64 {
        self.scoring.fall_interval()
    }

    pub fn last_fall_time(&self) -> f64 {
        self.last_fall_time
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn playfield(&self) -> &Playfield {
        &self.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<PlacementEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.mode = self.mode();
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.help_open = self.help_open;
        out.seed = self.generator.seed();
        out.score = self.scoring.score();
        out.level = self.scoring.level();
        out.lines = self.scoring.lines();
        out.fall_interval = self.scoring.fall_interval();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the lookahead piece and draw a new one.
    /// Returns false (and ends the game) if the new piece is blocked at spawn.
    fn spawn_piece(&mut self) -> bool {
        self.current = Piece::new(self.next.kind);
        self.next = Piece::new(self.generator.draw());

        if self.board.collides(&self.current, 0, 0) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Movement, rotation and drops are only honored while playing
    fn gameplay_allowed(&self) -> bool {
        self.mode() == GameMode::Playing
    }

    /// Try to move the current piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.gameplay_allowed() || self.board.collides(&self.current, dx, dy) {
            return false;
        }
        self.current = self.current.shifted(dx, dy);
        true
    }

    /// Commit the current piece, clear lines, score, and spawn the next piece
    fn place_piece(&mut self) {
        let piece = self.current;
        self.board.place(&piece);

        let cleared = self.board.clear_full_rows();
        let result = self.scoring.apply_clear(cleared);
        let spawned = self.spawn_piece();

        self.last_event = Some(PlacementEvent {
            kind: piece.kind,
            lines_cleared: result.lines_cleared,
            points: result.points,
            score: self.scoring.score(),
            level: self.scoring.level(),
            level_up: result.level_up,
            game_over: !spawned,
        });
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row; never places the piece
    pub fn soft_drop_step(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Drop the current piece as far as it goes and place it immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.gameplay_allowed() {
            return false;
        }
        while !self.board.collides(&self.current, 0, 1) {
            self.current.y += 1;
        }
        self.place_piece();
        true
    }

    /// Rotate clockwise, trying the kick offsets if needed
    pub fn rotate(&mut self) -> bool {
        if !self.gameplay_allowed() {
            return false;
        }
        let board = &self.board;
        match try_rotate(&self.current, |piece, dx, dy| board.collides(piece, dx, dy)) {
            Some((rotated, _offset)) => {
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Toggle Playing <-> Paused. Blocked by game over and by the help overlay.
    pub fn toggle_pause(&mut self) -> bool {
        if self.help_open || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    pub fn toggle_help(&mut self) -> bool {
        self.help_open = !self.help_open;
        true
    }

    pub fn close_help(&mut self) -> bool {
        if !self.help_open {
            return false;
        }
        self.help_open = false;
        true
    }

    /// Start over from any mode: empty playfield, level 1, fresh pieces
    pub fn restart(&mut self) -> bool {
        self.board.clear();
        self.scoring.reset();
        self.last_event = None;
        self.paused = false;
        self.game_over = false;
        self.help_open = false;

        self.next = Piece::new(self.generator.draw());
        self.spawn_piece();
        true
    }

    /// Apply a single game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop_step(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Help => self.toggle_help(),
            GameAction::CloseHelp => self.close_help(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Apply every action that fired during one frame.
    ///
    /// Restart, help and close-help are evaluated first and end the frame. While
    /// the help overlay is open nothing else runs. Pause comes next and also ends
    /// the frame. Movement is then applied in a fixed order (left, right, soft
    /// drop, hard drop, rotate), and only while playing.
    /// Returns true if any action changed the state.
    pub fn apply_frame(&mut self, actions: &[GameAction]) -> bool {
        let fired = |a: GameAction| actions.contains(&a);

        if fired(GameAction::Restart) {
            return self.restart();
        }
        if fired(GameAction::Help) {
            return self.toggle_help();
        }
        if fired(GameAction::CloseHelp) && self.close_help() {
            return true;
        }
        if self.help_open {
            return false;
        }
        if fired(GameAction::Pause) && self.toggle_pause() {
            return true;
        }
        if !self.gameplay_allowed() {
            return false;
        }

        let mut changed = false;
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Rotate,
        ] {
            if fired(action) {
                changed |= self.apply_action(action);
            }
        }
        changed
    }

    /// Gravity clock - call once per frame with the current time in seconds.
    ///
    /// Once a full fall interval has elapsed since the last descent, the piece
    /// moves down one row, or is placed if it cannot.
    /// Returns true if the piece moved or was placed.
    pub fn update(&mut self, current_time: f64) -> bool {
        if !self.gameplay_allowed() {
            return false;
        }
        if current_time - self.last_fall_time < self.scoring.fall_interval() {
            return false;
        }

        if self.board.collides(&self.current, 0, 1) {
            self.place_piece();
        } else {
            self.current.y += 1;
        }
        self.last_fall_time = current_time;
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
