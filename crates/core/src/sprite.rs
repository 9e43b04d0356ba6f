//! Sprites and the one drawing primitive every task uses.

use crate::canvas::Canvas;
use crate::types::Emphasis;

/// A block of ASCII art with its bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    text: String,
    rows: usize,
    columns: usize,
}

impl Sprite {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (rows, columns) = frame_size(&text);
        Self {
            text,
            rows,
            columns,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bounding box as `(rows, columns)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Draw at a (possibly fractional) position, rounded to the nearest cell.
    pub fn draw(&self, canvas: &mut dyn Canvas, row: f64, column: f64, emphasis: Emphasis) {
        draw_frame(canvas, row, column, &self.text, emphasis, false);
    }

    /// Blank out exactly the cells [`Sprite::draw`] would have written.
    pub fn erase(&self, canvas: &mut dyn Canvas, row: f64, column: f64) {
        draw_frame(canvas, row, column, &self.text, Emphasis::Normal, true);
    }
}

/// Size of a multi-line text fragment as `(rows, columns)`.
///
/// Columns count characters, not bytes.
pub fn frame_size(text: &str) -> (usize, usize) {
    let mut rows = 0;
    let mut columns = 0;
    for line in text.lines() {
        rows += 1;
        columns = columns.max(line.chars().count());
    }
    (rows, columns)
}

/// Draw multi-line text at `(start_row, start_column)`, or erase it when `negative` is set.
///
/// Spaces are transparent. Cells outside the canvas are clipped and the bottom-right cell is
/// never written: terminals scroll when the cursor lands there.
pub fn draw_frame(
    canvas: &mut dyn Canvas,
    start_row: f64,
    start_column: f64,
    text: &str,
    emphasis: Emphasis,
    negative: bool,
) {
    let (rows_number, columns_number) = canvas.size();
    let (rows_number, columns_number) = (rows_number as i64, columns_number as i64);
    let first_row = start_row.round() as i64;
    let first_column = start_column.round() as i64;

    for (dy, line) in text.lines().enumerate() {
        let row = first_row + dy as i64;
        if row < 0 {
            continue;
        }
        if row >= rows_number {
            break;
        }

        for (dx, symbol) in line.chars().enumerate() {
            let column = first_column + dx as i64;
            if column < 0 {
                continue;
            }
            if column >= columns_number {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            if row == rows_number - 1 && column == columns_number - 1 {
                continue;
            }

            let symbol = if negative { ' ' } else { symbol };
            canvas.write(row as u16, column as u16, symbol, emphasis);
        }
    }
}
