//! Board module - occupancy grid, collision, locking, line clearing
//!
//! The board is a `width x height` grid of boolean occupancy stored as a flat
//! row-major vector. Coordinates are `(x, y)` with `y = 0` the top (spawn)
//! row and `y = height - 1` the floor. Cells record locked blocks only; the
//! active piece lives in the game state and is merged in at lock or render.

use crate::types::Coordinate;

/// The game grid. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat occupancy, row-major (`y * width + x`).
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
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

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// In bounds and occupied by a locked block.
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// In bounds and free. This is the per-cell placement predicate; moves
    /// and rotations validate against it with different candidate blocks.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| !self.cells[i]).unwrap_or(false)
    }

    /// Set a single cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// True iff every candidate block is in bounds and unoccupied.
    pub fn can_place(&self, blocks: &[Coordinate]) -> bool {
        blocks.iter().all(|b| self.is_open(b.x, b.y))
    }

    /// Transfer blocks into permanent occupancy.
    ///
    /// Out-of-bounds blocks are silently dropped: spawn offsets can extend
    /// above the top row, and those blocks simply never land on the grid.
    pub fn lock(&mut self, blocks: &[Coordinate]) {
        for b in blocks {
            if let Some(i) = self.index(b.x, b.y) {
                self.cells[i] = true;
            }
        }
    }

    pub fn is_row_full(&self, y: i32) -> bool {
        (0..self.width).all(|x| self.occupied(x, y))
    }

    /// Clear every full row, shifting the rows above each down by one.
    ///
    /// Single top-to-bottom pass. When row `y` is full, rows `1..=y` each
    /// take the contents of the row above and row 0 empties; rows below `y`
    /// are untouched, so several full rows all clear in the same pass.
    /// Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..self.height {
            if !self.is_row_full(y) {
                continue;
            }

            for shift_y in (1..=y).rev() {
                for x in 0..self.width {
                    let above = self.occupied(x, shift_y - 1);
                    self.set(x, shift_y, above);
                }
            }
            for x in 0..self.width {
                self.set(x, 0, false);
            }

            cleared += 1;
        }
        cleared
    }

    /// Total number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Raw occupancy, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
