//! Plasma gun projectiles.

use log::debug;

use space_garbage_core::{Step, Task, TaskContext};

use crate::types::Emphasis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash,
    Glow,
    Fly,
}

/// A shot moving in a straight line until it leaves the field or hits an obstacle.
///
/// The muzzle flashes `*` then `O` for one tick each; in flight the shot is drawn as `|`
/// (or `-` when it moves sideways) and erased on the following tick.
#[derive(Debug, Clone)]
pub struct Projectile {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: Phase,
    mark: Option<(u16, u16)>,
}

impl Projectile {
    pub fn new(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: Phase::Flash,
            mark: None,
        }
    }

    fn symbol(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn cell(&self) -> (u16, u16) {
        (self.row.round().max(0.0) as u16, self.column.round().max(0.0) as u16)
    }
}

impl Task for Projectile {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        match self.phase {
            Phase::Flash => {
                let (row, column) = self.cell();
                cx.canvas.write(row, column, '*', Emphasis::Normal);
                self.phase = Phase::Glow;
                return Step::Continue;
            }
            Phase::Glow => {
                let (row, column) = self.cell();
                cx.canvas.write(row, column, 'O', Emphasis::Normal);
                self.mark = Some((row, column));
                self.phase = Phase::Fly;
                return Step::Continue;
            }
            Phase::Fly => {}
        }

        if let Some((row, column)) = self.mark.take() {
            cx.canvas.write(row, column, ' ', Emphasis::Normal);
            self.row += self.row_speed;
            self.column += self.column_speed;
        }

        let (rows, columns) = cx.canvas.size();
        let max_row = rows as f64 - 1.0;
        let max_column = columns as f64 - 1.0;
        let inside = 0.0 < self.row
            && self.row < max_row
            && 0.0 < self.column
            && self.column < max_column;
        if !inside {
            return Step::Done;
        }

        if let Some(id) = cx.world.check_collision(self.row, self.column).map(|o| o.id()) {
            debug!("shot hit obstacle {} at ({:.1}, {:.1})", id, self.row, self.column);
            cx.world.flag_collision(id);
            return Step::Done;
        }

        let (row, column) = self.cell();
        cx.canvas.write(row, column, self.symbol(), Emphasis::Bold);
        self.mark = Some((row, column));
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "projectile"
    }
}
