//! Debug overlay outlining every registered obstacle.

use space_garbage_core::{Sprite, Step, Task, TaskContext};

use crate::types::Emphasis;

#[derive(Debug, Clone, Default)]
pub struct ObstacleOverlay {
    drawn: Vec<(f64, f64, Sprite)>,
}

impl ObstacleOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for ObstacleOverlay {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        for (row, column, frame) in self.drawn.drain(..) {
            frame.erase(cx.canvas, row, column);
        }

        for obstacle in cx.world.obstacles().iter() {
            let (row, column) = obstacle.bounding_box_corner();
            let frame = obstacle.bounding_box_frame();
            frame.draw(cx.canvas, row, column, Emphasis::Dim);
            self.drawn.push((row, column, frame));
        }
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "obstacle-overlay"
    }
}
