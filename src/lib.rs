//! Terminal falling-block puzzle game.
//!
//! The `core` module holds the whole game: grid, shape catalog, state
//! machine, and the mutex-guarded engine two drivers share. `input` decodes
//! key events and `term` draws snapshots; both are thin collaborators
//! around the engine.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
