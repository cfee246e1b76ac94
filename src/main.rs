//! Terminal runner (default binary).
//!
//! Fixed-period frame loop: collect key events until the next frame is due,
//! apply that frame's edge-triggered actions, advance the gravity clock, log
//! what happened, then render.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;
use blockfall::{Config, EventLog, LogRecord};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let mut log = EventLog::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, &mut log));

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, log: &mut EventLog) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    let started = Instant::now();
    log.record(&LogRecord::SessionStart {
        t: 0.0,
        seed: game.seed(),
    });

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = config.frame_duration();
    let mut next_frame = Instant::now();

    'game: loop {
        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        break 'game;
                    }
                    input.handle_key_event(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        next_frame = now + frame;
        let t = now.duration_since(started).as_secs_f64();

        let actions = input.frame(now);
        let was_over = game.is_game_over();
        if game.apply_frame(&actions) && actions.contains(&GameAction::Restart) {
            log.record(&LogRecord::Restart { t });
        }
        // A hard drop and a gravity placement can both happen this frame.
        log_placement(&mut game, log, t);
        game.update(t);
        log_placement(&mut game, log, t);

        if !was_over && game.is_game_over() {
            log.record(&LogRecord::GameOver {
                t,
                score: game.score(),
                level: game.level(),
                lines: game.lines(),
            });
        }

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }

    log.record(&LogRecord::SessionEnd {
        t: started.elapsed().as_secs_f64(),
        score: game.score(),
        level: game.level(),
        lines: game.lines(),
    });
    Ok(())
}

fn log_placement(game: &mut GameState, log: &mut EventLog, t: f64) {
    if let Some(placement) = game.take_last_event() {
        log.record(&LogRecord::Placement { t, placement });
    }
}
