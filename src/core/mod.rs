//! Core module - pure game logic plus the shared mutation boundary
//!
//! Everything here is free of terminal I/O. The state machine (`Game`) and
//! its data model are single-threaded; `GameEngine` is the one concurrency
//! seam, wrapping a `Game` behind a mutex for the two drivers.

pub mod board;
pub mod engine;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use engine::GameEngine;
pub use game::{ActivePiece, Game};
pub use rng::SimpleRng;
pub use snapshot::Frame;
