//! TerminalRenderer: terminal session handling and framebuffer flushing.
//!
//! Commands are queued into an internal byte buffer and flushed once per
//! frame. Frames are small (one bordered board), so every draw is a full
//! redraw from the top-left corner.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush a framebuffer to the terminal, anchored at the top-left.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Tone> = None;
        for y in 0..fb.height() {
            if y > 0 {
                self.buf.queue(cursor::MoveTo(0, y))?;
            }
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current != Some(cell.tone) {
                    apply_tone(&mut self.buf, cell.tone)?;
                    current = Some(cell.tone);
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_tone(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match tone {
        Tone::Plain => {
            out.queue(SetForegroundColor(Color::White))?;
        }
        Tone::Border => {
            out.queue(SetForegroundColor(Color::Grey))?;
        }
        Tone::Block => {
            out.queue(SetForegroundColor(Color::Cyan))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Tone::Dim => {
            out.queue(SetForegroundColor(Color::DarkGrey))?;
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    Ok(())
}
