//! Shared scene state read and written by tasks between suspension points.
//!
//! Only one task runs at a time and it receives the world as `&mut World` for the length of a
//! single resumption, so every method here is atomic with respect to all other tasks.

use std::rc::Rc;

use log::debug;

use crate::obstacle::{Obstacle, ObstacleId, ObstacleIndex};
use crate::sprite::Sprite;

#[derive(Debug, Clone)]
pub struct World {
    obstacles: ObstacleIndex,
    /// Hit by a projectile but not yet seen by the owning garbage task.
    collided: Vec<ObstacleId>,
    ship_sprite: Option<Rc<Sprite>>,
    epoch: i32,
    game_over: bool,
}

impl World {
    pub fn new(epoch: i32) -> Self {
        Self {
            obstacles: ObstacleIndex::new(),
            collided: Vec::new(),
            ship_sprite: None,
            epoch,
            game_over: false,
        }
    }

    pub fn obstacles(&self) -> &ObstacleIndex {
        &self.obstacles
    }

    pub fn add_obstacle(
        &mut self,
        row: f64,
        column: f64,
        height: usize,
        width: usize,
    ) -> ObstacleId {
        self.obstacles.add(row, column, height, width)
    }

    /// Forget the obstacle everywhere. Idempotent.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.collided.retain(|&c| c != id);
        self.obstacles.remove(id)
    }

    /// Move a registered obstacle; unknown ids are ignored.
    pub fn move_obstacle(&mut self, id: ObstacleId, row: f64, column: f64) {
        if let Some(o) = self.obstacles.get_mut(id) {
            o.row = row;
            o.column = column;
        }
    }

    pub fn check_collision(&self, row: f64, column: f64) -> Option<&Obstacle> {
        self.obstacles.check_collision(row, column)
    }

    /// Mark a live obstacle as hit.
    ///
    /// Returns `false` (and records nothing) when the obstacle is no longer registered.
    pub fn flag_collision(&mut self, id: ObstacleId) -> bool {
        if !self.obstacles.contains(id) {
            return false;
        }
        if !self.collided.contains(&id) {
            debug!("obstacle {} hit", id);
            self.collided.push(id);
        }
        true
    }

    pub fn is_collided(&self, id: ObstacleId) -> bool {
        self.collided.contains(&id)
    }

    /// Observe and clear a hit on `id`.
    pub fn take_collision(&mut self, id: ObstacleId) -> bool {
        let before = self.collided.len();
        self.collided.retain(|&c| c != id);
        self.collided.len() != before
    }

    pub fn ship_sprite(&self) -> Option<&Rc<Sprite>> {
        self.ship_sprite.as_ref()
    }

    pub fn set_ship_sprite(&mut self, sprite: Rc<Sprite>) {
        self.ship_sprite = Some(sprite);
    }

    pub fn epoch(&self) -> i32 {
        self.epoch
    }

    pub fn set_epoch(&mut self, epoch: i32) {
        self.epoch = epoch;
    }

    /// Advance the epoch by one and return the new value.
    pub fn advance_epoch(&mut self) -> i32 {
        self.epoch += 1;
        self.epoch
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(crate::types::START_YEAR)
    }
}
