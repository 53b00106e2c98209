//! Character framebuffer for terminal rendering.
//!
//! Cells carry a semantic tone rather than concrete colors; the renderer
//! decides how each tone maps onto terminal styling.

/// Semantic styling class of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Border,
    Block,
    Dim,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            tone: Tone::Plain,
        }
    }
}

/// 2D grid of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are reset.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    #[inline]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Writes outside the buffer are discarded.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, tone };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, tone);
            cx += 1;
        }
    }
}
