//! Falling garbage and the spawner that keeps the orbit filled.

use std::rc::Rc;

use log::debug;

use space_garbage_core::{ObstacleId, Sleep, Sprite, Step, Task, TaskContext};

use crate::epoch::garbage_delay_ticks;
use crate::explosion::Explosion;
use crate::types::Emphasis;

/// One piece of garbage falling from the top edge.
///
/// The obstacle is registered on the first resumption and follows the sprite every tick.
/// A hit flagged by a projectile is picked up on the next step: the obstacle is dropped and the
/// task turns into an explosion.
#[derive(Debug, Clone)]
pub struct GarbageFall {
    sprite: Rc<Sprite>,
    row: f64,
    column: f64,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
    explosion: Option<Explosion>,
}

impl GarbageFall {
    pub fn new(sprite: Rc<Sprite>, column: f64, speed: f64) -> Self {
        Self {
            sprite,
            row: 0.0,
            column,
            speed,
            obstacle: None,
            drawn: false,
            explosion: None,
        }
    }

    fn register(&mut self, cx: &mut TaskContext<'_>) -> ObstacleId {
        if let Some(id) = self.obstacle {
            return id;
        }
        let (_, columns) = cx.canvas.size();
        self.column = self.column.clamp(0.0, columns.saturating_sub(1) as f64);
        let (height, width) = self.sprite.size();
        let id = cx.world.add_obstacle(self.row, self.column, height, width);
        self.obstacle = Some(id);
        id
    }
}

impl Task for GarbageFall {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if let Some(explosion) = self.explosion.as_mut() {
            return explosion.resume(cx);
        }

        let id = self.register(cx);

        if self.drawn {
            self.sprite.erase(cx.canvas, self.row, self.column);
            self.drawn = false;
            self.row += self.speed;
            cx.world.move_obstacle(id, self.row, self.column);

            if cx.world.take_collision(id) {
                cx.world.remove_obstacle(id);
                let (height, width) = self.sprite.size();
                let center_row = self.row + height as f64 / 2.0;
                let center_column = self.column + width as f64 / 2.0;
                debug!("obstacle {} destroyed at ({:.1}, {:.1})", id, center_row, center_column);

                let explosion = self.explosion.insert(Explosion::new(center_row, center_column));
                return explosion.resume(cx);
            }
        }

        let (rows, _) = cx.canvas.size();
        if self.row >= rows as f64 {
            cx.world.remove_obstacle(id);
            return Step::Done;
        }

        self.sprite.draw(cx.canvas, self.row, self.column, Emphasis::Normal);
        self.drawn = true;
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "garbage"
    }
}

/// Spawns garbage at a rate set by the current year, until the game is over.
#[derive(Debug, Clone)]
pub struct GarbageSpawner {
    frames: Vec<Rc<Sprite>>,
    speed: f64,
    sleep: Sleep,
}

impl GarbageSpawner {
    pub fn new(frames: Vec<Rc<Sprite>>, speed: f64) -> Self {
        Self {
            frames,
            speed,
            sleep: Sleep::default(),
        }
    }
}

impl Task for GarbageSpawner {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if cx.world.is_game_over() {
            return Step::Done;
        }
        if self.sleep.tick() {
            return Step::Continue;
        }

        let Some(delay) = garbage_delay_ticks(cx.world.epoch()) else {
            return Step::Continue;
        };
        let Some(frame) = cx.rng.choose(&self.frames).cloned() else {
            return Step::Continue;
        };

        let (_, columns) = cx.canvas.size();
        let column = cx.rng.range_inclusive(1, columns as i32 - 2);
        debug!("garbage spawned at column {} (next in {} ticks)", column, delay);
        cx.spawn(GarbageFall::new(frame, column as f64, self.speed));

        self.sleep.start(delay);
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "garbage-spawner"
    }
}
