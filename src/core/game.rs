//! Game state machine - spawn, gravity, movement, rotation, locking
//!
//! `Game` owns the board and at most one active piece. It is pure state with
//! no locking; `core::engine::GameEngine` wraps it in the mutation boundary
//! the two drivers share. Rejected moves and rotations are silent no-ops,
//! never errors.

use crate::core::pieces::{blocks, next_blocks, style_count};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::Frame;
use crate::core::Board;
use crate::types::{Coordinate, ShapeKind};

/// The falling piece: a shape kind, an absolute anchor, and a style index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub position: Coordinate,
    pub style_index: usize,
}

impl ActivePiece {
    pub fn new(kind: ShapeKind, position: Coordinate) -> Self {
        Self {
            kind,
            position,
            style_index: 0,
        }
    }

    /// Absolute board coordinates of the piece's blocks.
    pub fn absolute_blocks(&self) -> [Coordinate; 4] {
        blocks(self.kind, self.style_index).map(|b| Coordinate::absolute(self.position, b))
    }

    /// Absolute blocks the piece would occupy after one rotation.
    pub fn absolute_next_blocks(&self) -> [Coordinate; 4] {
        next_blocks(self.kind, self.style_index).map(|b| Coordinate::absolute(self.position, b))
    }

    /// Advance to the next rotation style. The caller validates legality.
    pub fn rotate(&mut self) {
        self.style_index = (self.style_index + 1) % style_count(self.kind);
    }
}

/// Complete game state: board, optional active piece, shape-selection RNG.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
}

impl Game {
    pub fn new(width: i32, height: i32, rng: SimpleRng) -> Self {
        Self {
            board: Board::new(width, height),
            active: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// One gravity turn.
    ///
    /// Without an active piece this spawns one and returns; the new piece
    /// neither falls nor triggers a line scan on its spawn turn. With an
    /// active piece it either steps down one row or, when blocked, locks the
    /// piece into the board; full rows are then cleared in either case.
    pub fn next_turn(&mut self) {
        let Some(piece) = self.active else {
            self.spawn();
            return;
        };

        if self.board.can_place(&shifted(piece.absolute_blocks(), 0, 1)) {
            self.active = Some(ActivePiece {
                position: Coordinate::new(piece.position.x, piece.position.y + 1),
                ..piece
            });
        } else {
            self.board.lock(&piece.absolute_blocks());
            self.active = None;
        }

        self.board.clear_lines();
    }

    /// Spawn a uniformly-random piece anchored at `(width / 2, 0)`, style 0.
    ///
    /// There is deliberately no overlap check here: when the stack reaches
    /// the top rows a new piece spawns overlapping it, exactly as the game
    /// has always behaved.
    fn spawn(&mut self) {
        let kind = ShapeKind::from_index(self.rng.next_range(7));
        let anchor = Coordinate::new(self.board.width() / 2, 0);
        self.active = Some(ActivePiece::new(kind, anchor));
    }

    /// Shift the active piece by `(dx, dy)` if the target cells are free.
    /// Returns whether the piece moved.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        if !self.board.can_place(&shifted(piece.absolute_blocks(), dx, dy)) {
            return false;
        }

        self.active = Some(ActivePiece {
            position: Coordinate::new(piece.position.x + dx, piece.position.y + dy),
            ..piece
        });
        true
    }

    pub fn move_left(&mut self) {
        self.try_move(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.try_move(1, 0);
    }

    /// Rotate the active piece to its next style if that style fits.
    pub fn change_shape_style(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };

        if self.board.can_place(&piece.absolute_next_blocks()) {
            piece.rotate();
            self.active = Some(piece);
        }
    }

    /// Drop the active piece as far down as it goes. The piece is not
    /// locked here; the next gravity turn finds it blocked and locks it.
    pub fn fall(&mut self) {
        while self.try_move(0, 1) {}
    }

    /// Write the board-plus-active-piece overlay into a reusable frame.
    /// Active blocks outside the grid are clipped.
    pub fn render_into(&self, frame: &mut Frame) {
        frame.reset(self.board.width(), self.board.height());
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                if self.board.occupied(x, y) {
                    frame.set(x, y, true);
                }
            }
        }

        if let Some(piece) = &self.active {
            for b in piece.absolute_blocks() {
                frame.set(b.x, b.y, true);
            }
        }
    }

    pub fn render(&self) -> Frame {
        let mut frame = Frame::new(self.board.width(), self.board.height());
        self.render_into(&mut frame);
        frame
    }
}

fn shifted(blocks: [Coordinate; 4], dx: i32, dy: i32) -> [Coordinate; 4] {
    blocks.map(|b| Coordinate::new(b.x + dx, b.y + dy))
}
