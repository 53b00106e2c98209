//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (cells)
pub const DEFAULT_BOARD_WIDTH: i32 = 30;
pub const DEFAULT_BOARD_HEIGHT: i32 = 30;

/// Gravity cadence: one turn advance per interval (milliseconds)
pub const TURN_INTERVAL_MS: u64 = 700;

/// A 2D integer point on (or off) the board.
///
/// Relative block offsets and absolute board positions use the same type;
/// `absolute` combines a base position with a relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Absolute coordinate from a base position and a relative offset.
    pub fn absolute(base: Coordinate, relative: Coordinate) -> Self {
        Self {
            x: base.x + relative.x,
            y: base.y + relative.y,
        }
    }
}

/// Tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Map a bounded random draw to a kind.
    ///
    /// Shape selection always draws from `0..7`; anything else is a
    /// programming error, not a runtime condition.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::L,
            3 => ShapeKind::O,
            4 => ShapeKind::S,
            5 => ShapeKind::T,
            6 => ShapeKind::Z,
            _ => unreachable!("shape index out of range: {index}"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
        }
    }
}

/// Player commands decoded from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    Drop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_adds_componentwise() {
        let base = Coordinate::new(15, 0);
        let rel = Coordinate::new(-1, 2);
        assert_eq!(Coordinate::absolute(base, rel), Coordinate::new(14, 2));
    }

    #[test]
    fn from_index_covers_all_seven() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(ShapeKind::from_index(i as u32), *kind);
        }
    }
}
