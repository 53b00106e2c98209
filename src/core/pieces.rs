//! Shape catalog - tetromino styles as static offset tables
//!
//! Each kind has an ordered list of rotation styles; each style is 4 block
//! offsets relative to the piece anchor. O has a single style, every other
//! kind cycles through 4. The tables are this game's own catalog rather
//! than SRS: offsets are anchored on a center cell and may be negative, so
//! a freshly spawned piece can extend one row above the board.

use crate::types::{Coordinate, ShapeKind};

/// One rotation style: 4 block offsets relative to the anchor.
pub type BlockOffsets = [Coordinate; 4];

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const I_STYLES: [BlockOffsets; 4] = [
    [c(0, -1), c(0, 0), c(0, 1), c(0, 2)],
    [c(-1, 0), c(0, 0), c(1, 0), c(2, 0)],
    [c(1, -1), c(1, 0), c(1, 1), c(1, 2)],
    [c(-1, 1), c(0, 1), c(1, 1), c(2, 1)],
];

const J_STYLES: [BlockOffsets; 4] = [
    [c(0, -1), c(0, 0), c(0, 1), c(-1, 1)],
    [c(-1, -1), c(-1, 0), c(0, 0), c(1, 0)],
    [c(0, -1), c(0, 0), c(0, 1), c(1, -1)],
    [c(1, 1), c(-1, 0), c(0, 0), c(1, 0)],
];

const L_STYLES: [BlockOffsets; 4] = [
    [c(0, -1), c(0, 0), c(0, 1), c(1, 1)],
    [c(-1, 1), c(-1, 0), c(0, 0), c(1, 0)],
    [c(0, -1), c(0, 0), c(0, 1), c(-1, -1)],
    [c(1, -1), c(-1, 0), c(0, 0), c(1, 0)],
];

const O_STYLES: [BlockOffsets; 1] = [[c(0, 0), c(0, 1), c(1, 1), c(1, 0)]];

const S_STYLES: [BlockOffsets; 4] = [
    [c(-1, 1), c(0, 1), c(0, 0), c(1, 0)],
    [c(-1, -1), c(-1, 0), c(0, 0), c(0, 1)],
    [c(-1, 0), c(0, 0), c(0, -1), c(1, -1)],
    [c(0, -1), c(0, 0), c(1, 0), c(1, 1)],
];

const T_STYLES: [BlockOffsets; 4] = [
    [c(-1, 0), c(0, 0), c(1, 0), c(0, 1)],
    [c(-1, 0), c(0, -1), c(0, 0), c(0, 1)],
    [c(-1, 0), c(0, 0), c(1, 0), c(0, -1)],
    [c(1, 0), c(0, -1), c(0, 0), c(0, 1)],
];

const Z_STYLES: [BlockOffsets; 4] = [
    [c(-1, 0), c(0, 0), c(0, 1), c(1, 1)],
    [c(-1, 0), c(-1, 1), c(0, 0), c(0, -1)],
    [c(-1, -1), c(0, -1), c(0, 0), c(1, 0)],
    [c(0, 0), c(0, 1), c(1, 0), c(1, -1)],
];

/// All rotation styles for a kind, in cycle order.
pub fn styles(kind: ShapeKind) -> &'static [BlockOffsets] {
    match kind {
        ShapeKind::I => &I_STYLES,
        ShapeKind::J => &J_STYLES,
        ShapeKind::L => &L_STYLES,
        ShapeKind::O => &O_STYLES,
        ShapeKind::S => &S_STYLES,
        ShapeKind::T => &T_STYLES,
        ShapeKind::Z => &Z_STYLES,
    }
}

/// Number of rotation styles a kind cycles through (1 for O, 4 otherwise).
pub fn style_count(kind: ShapeKind) -> usize {
    styles(kind).len()
}

/// Block offsets for a kind at the given style index (reduced modulo count).
pub fn blocks(kind: ShapeKind, style_index: usize) -> BlockOffsets {
    let table = styles(kind);
    table[style_index % table.len()]
}

/// Block offsets for the style the piece would take after one rotation.
pub fn next_blocks(kind: ShapeKind, style_index: usize) -> BlockOffsets {
    let table = styles(kind);
    table[(style_index + 1) % table.len()]
}
