//! GameView: maps an engine `Frame` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Draws a bordered box around the
//! board, with each board cell widened to a fixed number of terminal columns
//! to compensate for glyph aspect ratio.

use crate::core::Frame;
use crate::term::fb::{FrameBuffer, Tone};

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell reads roughly square in most terminals.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        assert!(cell_w > 0, "cell width must be positive");
        Self { cell_w }
    }

    /// Columns the rendered view occupies for a board of the given width.
    pub fn view_width(&self, board_width: i32) -> u16 {
        (board_width as u16) * self.cell_w + 2
    }

    /// Rows the rendered view occupies for a board of the given height.
    pub fn view_height(&self, board_height: i32) -> u16 {
        (board_height as u16) + 2
    }

    /// Render a snapshot into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, frame: &Frame, fb: &mut FrameBuffer) {
        let view_w = self.view_width(frame.width());
        let view_h = self.view_height(frame.height());
        fb.resize(view_w, view_h);

        self.draw_border(fb, view_w, view_h);

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let (ch, tone) = if frame.occupied(x, y) {
                    ('█', Tone::Block)
                } else {
                    ('·', Tone::Dim)
                };
                let px = 1 + (x as u16) * self.cell_w;
                let py = 1 + y as u16;
                for dx in 0..self.cell_w {
                    fb.put_char(px + dx, py, ch, tone);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(frame, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', Tone::Border);
        fb.put_char(w - 1, 0, '┐', Tone::Border);
        fb.put_char(0, h - 1, '└', Tone::Border);
        fb.put_char(w - 1, h - 1, '┘', Tone::Border);

        for x in 1..w - 1 {
            fb.put_char(x, 0, '─', Tone::Border);
            fb.put_char(x, h - 1, '─', Tone::Border);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, '│', Tone::Border);
            fb.put_char(w - 1, y, '│', Tone::Border);
        }
    }
}
