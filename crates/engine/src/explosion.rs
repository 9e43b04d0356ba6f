//! Explosion animation played where a piece of garbage was shot.

use space_garbage_core::{draw_frame, frame_size, Step, Task, TaskContext};

use crate::types::Emphasis;

pub const EXPLOSION_FRAMES: [&str; 4] = [
    "           (_)
       (  (   (  (
      () (  (  )
        ( )  ()",
    "           (_)
       (  (   (
         (  (  )
          )  (",
    "            (
          (   (
         (     (
          )  (",
    "            (
              (
            (",
];

/// Each frame is drawn for one tick and erased for one tick.
#[derive(Debug, Clone)]
pub struct Explosion {
    corner_row: f64,
    corner_column: f64,
    frame: usize,
    drawn: bool,
}

impl Explosion {
    /// Centre the animation on `(center_row, center_column)`.
    pub fn new(center_row: f64, center_column: f64) -> Self {
        let (rows, columns) = frame_size(EXPLOSION_FRAMES[0]);
        Self {
            corner_row: center_row - rows as f64 / 2.0,
            corner_column: center_column - columns as f64 / 2.0,
            frame: 0,
            drawn: false,
        }
    }
}

impl Task for Explosion {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        let Some(frame) = EXPLOSION_FRAMES.get(self.frame) else {
            return Step::Done;
        };

        if self.drawn {
            draw_frame(
                cx.canvas,
                self.corner_row,
                self.corner_column,
                frame,
                Emphasis::Normal,
                true,
            );
            self.drawn = false;
            self.frame += 1;
        } else {
            draw_frame(
                cx.canvas,
                self.corner_row,
                self.corner_column,
                frame,
                Emphasis::Bold,
                false,
            );
            self.drawn = true;
        }
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "explosion"
    }
}
