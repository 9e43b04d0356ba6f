//! The real rendering surface: a framebuffer presented through the terminal renderer.

use anyhow::{Context, Result};

use space_garbage_core::Canvas;

use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::Emphasis;

pub struct TerminalCanvas {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
}

impl TerminalCanvas {
    /// Sized to the current terminal. Call [`TerminalCanvas::enter`] before the first present.
    pub fn new() -> Result<Self> {
        let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
        Ok(Self {
            fb: FrameBuffer::new(width, height),
            renderer: TerminalRenderer::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Follow the terminal size. A change blanks the buffer and forces a full redraw.
    fn sync_size(&mut self) -> Result<()> {
        let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
        if (width, height) != (self.fb.width(), self.fb.height()) {
            self.fb.resize(width, height);
            self.renderer.invalidate();
        }
        Ok(())
    }
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn write(&mut self, row: u16, column: u16, symbol: char, emphasis: Emphasis) {
        self.fb.write(row, column, symbol, emphasis);
    }

    /// Present the frame, then pick up a terminal resize for the next tick.
    fn present(&mut self) -> Result<()> {
        self.renderer.present(&self.fb)?;
        self.sync_size()
    }
}
