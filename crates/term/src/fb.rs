//! Framebuffer and style types for terminal rendering.
//!
//! The framebuffer is persistent: cells keep their content until a task overwrites them, the
//! way a curses window does. It is also the in-memory [`Canvas`] used by tests.

use anyhow::Result;

use space_garbage_core::Canvas;

use crate::types::Emphasis;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub fn with_emphasis(emphasis: Emphasis) -> Self {
        let base = Self::default();
        match emphasis {
            Emphasis::Dim => Self { dim: true, ..base },
            Emphasis::Normal => base,
            Emphasis::Bold => Self {
                bold: true,
                fg: Rgb::new(255, 255, 255),
                ..base
            },
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        if self.bold {
            Emphasis::Bold
        } else if self.dim {
            Emphasis::Dim
        } else {
            Emphasis::Normal
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells, addressed as `(x, y)` = `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    presents: u64,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            presents: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, blanking it.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Characters of row `y`, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    /// Whole buffer as newline-separated rows.
    pub fn text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Times [`Canvas::present`] was called on this buffer directly.
    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn write(&mut self, row: u16, column: u16, symbol: char, emphasis: Emphasis) {
        self.put_char(column, row, symbol, CellStyle::with_emphasis(emphasis));
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }
}
