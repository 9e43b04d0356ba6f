//! The terminal "game over" banner.

use space_garbage_core::{draw_frame, frame_size, Step, Task, TaskContext};

use crate::types::Emphasis;

pub const GAME_OVER_FRAME: &str = r"   _____                         ____
  / ____|                       / __ \
 | |  __  __ _ _ __ ___   ___  | |  | |_   _____ _ __
 | | |_ |/ _` | '_ ` _ \ / _ \ | |  | \ \ / / _ \ '__|
 | |__| | (_| | | | | | |  __/ | |__| |\ V /  __/ |
  \_____|\__,_|_| |_| |_|\___|  \____/  \_/ \___|_|";

/// Redraws the banner centred on the canvas every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOver;

impl GameOver {
    pub fn new() -> Self {
        Self
    }

    /// Top-left corner of the banner on a `(rows, columns)` canvas.
    pub fn corner(canvas_size: (u16, u16)) -> (f64, f64) {
        let (rows, columns) = frame_size(GAME_OVER_FRAME);
        let row = (canvas_size.0 as f64 - rows as f64) / 2.0;
        let column = (canvas_size.1 as f64 - columns as f64) / 2.0;
        (row.floor(), column.floor())
    }
}

impl Task for GameOver {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        let (row, column) = Self::corner(cx.canvas.size());
        draw_frame(cx.canvas, row, column, GAME_OVER_FRAME, Emphasis::Bold, false);
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "game-over"
    }
}
