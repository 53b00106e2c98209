//! Terminal Tetris runner.
//!
//! Two drivers share one engine: a background timer thread advances gravity
//! on a fixed cadence, and the main thread blocks on key events. Each driver
//! redraws after mutating the engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_term::core::{GameEngine, SimpleRng};
use tetris_term::input::{map_key_event, should_quit};
use tetris_term::term::Screen;
use tetris_term::types::{
    GameAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TURN_INTERVAL_MS,
};

fn main() -> Result<()> {
    let engine = Arc::new(GameEngine::new(
        DEFAULT_BOARD_WIDTH,
        DEFAULT_BOARD_HEIGHT,
        SimpleRng::from_time(),
    ));
    let screen = Arc::new(Mutex::new(Screen::new(
        DEFAULT_BOARD_WIDTH,
        DEFAULT_BOARD_HEIGHT,
    )));

    lock_screen(&screen).enter()?;
    let result = run(&engine, &screen);

    // Always try to restore terminal state.
    let _ = lock_screen(&screen).exit();
    result
}

fn run(engine: &Arc<GameEngine>, screen: &Arc<Mutex<Screen>>) -> Result<()> {
    lock_screen(screen).redraw(engine)?;

    let running = Arc::new(AtomicBool::new(true));
    let timer = spawn_timer(engine, screen, &running);

    let result = input_loop(engine, screen);

    running.store(false, Ordering::Relaxed);
    let _ = timer.join();
    result
}

/// Gravity driver: sleep, advance one turn, redraw. The sleep happens
/// outside both locks.
fn spawn_timer(
    engine: &Arc<GameEngine>,
    screen: &Arc<Mutex<Screen>>,
    running: &Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    let engine = Arc::clone(engine);
    let screen = Arc::clone(screen);
    let running = Arc::clone(running);

    thread::spawn(move || {
        while running.load(Ordering::Relaxed) {
            thread::sleep(Duration::from_millis(TURN_INTERVAL_MS));
            if !running.load(Ordering::Relaxed) {
                break;
            }
            engine.advance_turn();
            // Draw failures are not fatal here; the input loop surfaces its own.
            let _ = lock_screen(&screen).redraw(&engine);
        }
    })
}

/// Input driver: blocking key reads on the calling thread.
fn input_loop(engine: &Arc<GameEngine>, screen: &Arc<Mutex<Screen>>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if should_quit(key) {
            return Ok(());
        }

        let Some(action) = map_key_event(key) else {
            continue;
        };

        match action {
            GameAction::MoveLeft => engine.move_left(),
            GameAction::MoveRight => engine.move_right(),
            GameAction::Rotate => engine.change_shape_style(),
            GameAction::Drop => engine.fall(),
        }

        lock_screen(screen).redraw(engine)?;
    }
}

fn lock_screen(screen: &Arc<Mutex<Screen>>) -> MutexGuard<'_, Screen> {
    screen.lock().unwrap_or_else(PoisonError::into_inner)
}
