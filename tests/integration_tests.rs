//! Integration tests - full game flow through the public API

use blockfall::core::{GameState, PieceGenerator};
use blockfall::types::{GameAction, GameMode, GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y};

fn assert_piece_in_bounds(game: &GameState) {
    for (x, y) in game.current_piece().cells() {
        assert!(
            (0..GRID_WIDTH as i8).contains(&x) && y < GRID_HEIGHT as i8,
            "cell ({}, {}) outside the playfield",
            x,
            y
        );
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.seed(), 12345);

    // Drop pieces straight down until the stack reaches the spawn area.
    let mut placements = 0;
    while !game.is_game_over() {
        assert!(game.hard_drop());
        assert!(game.take_last_event().is_some());
        placements += 1;
        assert!(placements < 200, "game never ended");
    }

    assert_eq!(game.mode(), GameMode::GameOver);
    assert!(!game.hard_drop());
    assert!(game.restart());
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.playfield().occupied_count(), 0);
}

#[test]
fn test_pieces_follow_generator_sequence() {
    let mut game = GameState::new(777);
    let expected: Vec<_> = PieceGenerator::new(777).take(10).collect();

    let mut seen = vec![game.current_piece().kind, game.next_piece().kind];
    for _ in 0..8 {
        game.hard_drop();
        seen.push(game.next_piece().kind);
    }
    assert_eq!(seen, expected);
}

#[test]
fn test_bounds_hold_under_random_play() {
    let mut game = GameState::new(99);
    let mut rng = PieceGenerator::new(4242);
    let mut t = 0.0;

    for _ in 0..5_000 {
        // Reuse the piece generator as a cheap deterministic action source.
        let action = match rng.draw().index() {
            0 => GameAction::MoveLeft,
            1 => GameAction::MoveRight,
            2 => GameAction::SoftDrop,
            3 => GameAction::Rotate,
            4 => GameAction::Rotate,
            5 => GameAction::MoveLeft,
            _ => GameAction::MoveRight,
        };
        game.apply_action(action);
        assert_piece_in_bounds(&game);

        t += 0.25;
        game.update(t);
        assert_piece_in_bounds(&game);

        if game.is_game_over() {
            game.restart();
        }
    }
}

#[test]
fn test_game_pause() {
    let mut game = GameState::new(12345);
    let start = *game.current_piece();

    assert!(game.apply_action(GameAction::Pause));
    assert_eq!(game.mode(), GameMode::Paused);

    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.update(100.0));
    assert_eq!(*game.current_piece(), start);

    assert!(game.apply_action(GameAction::Pause));
    assert_eq!(game.mode(), GameMode::Playing);
    assert!(game.update(100.0));
}

#[test]
fn test_help_overlay_flow() {
    let mut game = GameState::new(5);

    assert!(game.apply_frame(&[GameAction::Help]));
    assert_eq!(game.mode(), GameMode::HelpOverlay);
    assert!(!game.apply_frame(&[GameAction::HardDrop, GameAction::Pause]));
    assert_eq!(game.playfield().occupied_count(), 0);
    assert!(!game.is_paused());

    assert!(game.apply_frame(&[GameAction::CloseHelp]));
    assert_eq!(game.mode(), GameMode::Playing);
    assert!(game.apply_frame(&[GameAction::HardDrop]));
    assert_eq!(game.playfield().occupied_count(), 4);
}

#[test]
fn test_game_restart() {
    let mut game = GameState::new(12345);
    for _ in 0..5 {
        game.hard_drop();
    }
    game.apply_action(GameAction::Help);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.playfield().occupied_count(), 0);

    let piece = game.current_piece();
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.shape, piece.kind.shape());
}

#[test]
fn test_gravity_descends_once_per_interval() {
    let mut game = GameState::new(3);
    let y0 = game.current_piece().y;

    // 60 frames at ~16ms: just under one second, no descent yet.
    let mut t = 0.0;
    for _ in 0..60 {
        t += 0.016;
        game.update(t);
    }
    assert_eq!(game.current_piece().y, y0);

    for _ in 0..3 {
        t += 0.016;
        game.update(t);
    }
    assert_eq!(game.current_piece().y, y0 + 1);
}

#[test]
fn test_snapshot_matches_queries() {
    let mut game = GameState::new(31);
    game.hard_drop();
    game.move_left();

    let snap = game.snapshot();
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.level, game.level());
    assert_eq!(snap.lines, game.lines());
    assert_eq!(snap.fall_interval, game.fall_interval());
    assert_eq!(snap.mode, game.mode());
    assert_eq!(snap.current.x, game.current_piece().x);
    assert_eq!(snap.next.kind, game.next_piece().kind);

    let mut reused = snap;
    reused.clear();
    game.snapshot_into(&mut reused);
    assert_eq!(reused, snap);
}
