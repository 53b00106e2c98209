//! Frame: a read-only snapshot of the board with the active piece merged in
//!
//! The engine hands frames to the renderer; the renderer never sees live
//! game state. Frames can be reused across redraws to avoid reallocating.

/// Occupancy snapshot, row-major like the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Frame {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "frame dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset to the given dimensions with all cells empty, keeping the
    /// allocation when the size is unchanged.
    pub fn reset(&mut self, width: i32, height: i32) {
        assert!(width > 0 && height > 0, "frame dimensions must be positive");
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize((width * height) as usize, false);
    }

    pub fn occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.cells[(y * self.width + x) as usize]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, value: bool) {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = value;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
