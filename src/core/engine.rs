//! GameEngine - the shared mutation boundary
//!
//! One engine instance is shared by the timer driver and the input driver.
//! Every public operation, snapshots included, runs under the same mutex for
//! its full duration, so neither driver ever observes a piece mid-move or
//! mid-lock. The guard is scoped; release happens on every exit path.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::game::{ActivePiece, Game};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::Frame;

pub struct GameEngine {
    inner: Mutex<Game>,
}

impl GameEngine {
    pub fn new(width: i32, height: i32, rng: SimpleRng) -> Self {
        Self {
            inner: Mutex::new(Game::new(width, height, rng)),
        }
    }

    /// Acquire the engine lock. A poisoned lock is recovered: every mutation
    /// runs to completion under the guard, so the state inside is whole.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// One gravity turn: spawn, step down, or lock-and-clear.
    pub fn advance_turn(&self) {
        self.lock().next_turn();
    }

    pub fn move_left(&self) {
        self.lock().move_left();
    }

    pub fn move_right(&self) {
        self.lock().move_right();
    }

    pub fn change_shape_style(&self) {
        self.lock().change_shape_style();
    }

    /// Hard drop: sink the piece to its resting row. The next turn locks it.
    pub fn fall(&self) {
        self.lock().fall();
    }

    /// Consistent snapshot of the board with the active piece overlaid.
    pub fn snapshot(&self) -> Frame {
        self.lock().render()
    }

    /// Snapshot into a caller-owned frame, reusing its allocation.
    pub fn snapshot_into(&self, frame: &mut Frame) {
        self.lock().render_into(frame);
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.lock().active()
    }

    /// `(width, height)` of the board.
    pub fn dimensions(&self) -> (i32, i32) {
        let game = self.lock();
        (game.board().width(), game.board().height())
    }
}
