//! Terminal layer: framebuffer, game view, and the crossterm session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Tone};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;

use anyhow::Result;

use crate::core::{Frame, GameEngine};

/// Everything one redraw needs: the terminal session, the view, and
/// reusable snapshot/framebuffer storage.
///
/// Both drivers redraw after mutating the engine, so `Screen` lives behind
/// its own mutex in the binary; the engine lock is never held across a draw.
pub struct Screen {
    term: TerminalRenderer,
    view: GameView,
    frame: Frame,
    fb: FrameBuffer,
}

impl Screen {
    pub fn new(board_width: i32, board_height: i32) -> Self {
        let view = GameView::default();
        let fb = FrameBuffer::new(
            view.view_width(board_width),
            view.view_height(board_height),
        );
        Self {
            term: TerminalRenderer::new(),
            view,
            frame: Frame::new(board_width, board_height),
            fb,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    /// Snapshot the engine and flush one frame to the terminal.
    pub fn redraw(&mut self, engine: &GameEngine) -> Result<()> {
        engine.snapshot_into(&mut self.frame);
        self.view.render_into(&self.frame, &mut self.fb);
        self.term.draw(&self.fb)
    }
}
