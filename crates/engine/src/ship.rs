//! The player's ship: frame animation and control.

use std::rc::Rc;

use log::info;

use space_garbage_core::{update_speed, Sleep, Sprite, Step, Task, TaskContext};

use crate::epoch::gun_available;
use crate::fire::Projectile;
use crate::game_over::GameOver;
use crate::types::{Emphasis, BORDER_WIDTH};

/// Cycles `World::ship_sprite` through the ship frames forever.
#[derive(Debug, Clone)]
pub struct ShipAnimation {
    frames: Vec<Rc<Sprite>>,
    frame_ticks: u32,
    next: usize,
    sleep: Sleep,
}

impl ShipAnimation {
    /// `frames` is the full cycle (repeat a frame to show it longer); a new frame is set
    /// every `frame_ticks` ticks.
    pub fn new(frames: Vec<Rc<Sprite>>, frame_ticks: u32) -> Self {
        Self {
            frames,
            frame_ticks: frame_ticks.max(1),
            next: 0,
            sleep: Sleep::default(),
        }
    }
}

impl Task for ShipAnimation {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if self.frames.is_empty() {
            return Step::Done;
        }
        if self.sleep.tick() {
            return Step::Continue;
        }

        cx.world.set_ship_sprite(Rc::clone(&self.frames[self.next]));
        self.next = (self.next + 1) % self.frames.len();
        self.sleep.start(self.frame_ticks);
        Step::Continue
    }

    fn name(&self) -> &'static str {
        "ship-animation"
    }
}

/// Zero each velocity component whose next position would take a `sprite_size` sprite out of
/// the bordered field of a `canvas_size` canvas.
///
/// Positions and sizes are `(rows, columns)`.
pub fn constrain_velocity(
    position: (f64, f64),
    velocity: (f64, f64),
    sprite_size: (usize, usize),
    canvas_size: (u16, u16),
) -> (f64, f64) {
    let border = BORDER_WIDTH as f64;
    let fits = |next: f64, size: usize, extent: u16| {
        next >= border && next + size as f64 <= extent as f64 - border
    };

    let (mut row_speed, mut column_speed) = velocity;
    if !fits(position.0 + row_speed, sprite_size.0, canvas_size.0) {
        row_speed = 0.0;
    }
    if !fits(position.1 + column_speed, sprite_size.1, canvas_size.1) {
        column_speed = 0.0;
    }
    (row_speed, column_speed)
}

/// Reads the controls once per tick, moves and redraws the ship, fires, and ends the game when
/// the ship runs into garbage.
#[derive(Debug, Clone)]
pub struct ShipControl {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    fire_speed: (f64, f64),
    drawn: Option<(Rc<Sprite>, f64, f64)>,
}

impl ShipControl {
    pub fn new(row: f64, column: f64) -> Self {
        Self {
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            fire_speed: (crate::types::FIRE_ROW_SPEED, crate::types::FIRE_COLUMN_SPEED),
            drawn: None,
        }
    }

    pub fn with_velocity(mut self, row_speed: f64, column_speed: f64) -> Self {
        self.row_speed = row_speed;
        self.column_speed = column_speed;
        self
    }

    pub fn with_fire_speed(mut self, row_speed: f64, column_speed: f64) -> Self {
        self.fire_speed = (row_speed, column_speed);
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.column_speed)
    }

    fn erase(&mut self, cx: &mut TaskContext<'_>) {
        if let Some((sprite, row, column)) = self.drawn.take() {
            sprite.erase(cx.canvas, row, column);
        }
    }
}

impl Task for ShipControl {
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        let controls = cx.input.poll();
        let Some(sprite) = cx.world.ship_sprite().cloned() else {
            return Step::Continue;
        };

        let speed = update_speed(
            self.row_speed,
            self.column_speed,
            controls.row_delta,
            controls.column_delta,
        );
        let (row_speed, column_speed) =
            constrain_velocity((self.row, self.column), speed, sprite.size(), cx.canvas.size());
        self.row_speed = row_speed;
        self.column_speed = column_speed;
        self.row += row_speed;
        self.column += column_speed;

        self.erase(cx);

        let crashed = cx
            .world
            .obstacles()
            .iter()
            .any(|o| o.has_collision((self.row, self.column), (1, 1)));
        if crashed {
            info!(
                "ship hit at ({:.1}, {:.1}) in year {}",
                self.row,
                self.column,
                cx.world.epoch()
            );
            cx.world.set_game_over();
            cx.spawn(GameOver::new());
            return Step::Done;
        }

        sprite.draw(cx.canvas, self.row, self.column, Emphasis::Normal);
        self.drawn = Some((Rc::clone(&sprite), self.row, self.column));

        if controls.fire && gun_available(cx.world.epoch()) {
            let nose = self.column + (sprite.columns() / 2) as f64;
            let (row_speed, column_speed) = self.fire_speed;
            cx.spawn(Projectile::new(self.row, nose, row_speed, column_speed));
        }

        Step::Continue
    }

    fn name(&self) -> &'static str {
        "ship"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use space_garbage_core::{Canvas, ScriptedInput, SimpleRng, World};

    use crate::types::Controls;

    struct Blank(u16, u16);

    impl Canvas for Blank {
        fn size(&self) -> (u16, u16) {
            (self.0, self.1)
        }

        fn write(&mut self, _row: u16, _column: u16, _symbol: char, _emphasis: Emphasis) {}

        fn present(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn step(ship: &mut ShipControl, world: &mut World, input: &mut ScriptedInput) -> Step {
        let mut canvas = Blank(30, 50);
        let mut rng = SimpleRng::new(1);
        let mut spawned = Vec::new();
        let mut cx = TaskContext::new(world, &mut canvas, input, &mut rng, &mut spawned);
        ship.resume(&mut cx)
    }

    #[test]
    fn jump_out_of_the_field_is_cancelled_for_that_step() {
        let mut world = World::default();
        world.set_ship_sprite(Rc::new(Sprite::new("/^\\\n|_|")));
        let mut input = ScriptedInput::default();
        let mut ship = ShipControl::new(10.0, 10.0).with_velocity(0.0, 190.0);

        assert_eq!(step(&mut ship, &mut world, &mut input), Step::Continue);
        assert_eq!(ship.velocity(), (0.0, 0.0));
        assert_eq!(ship.position(), (10.0, 10.0));
    }

    #[test]
    fn input_moves_the_ship_and_keeps_momentum() {
        let mut world = World::default();
        world.set_ship_sprite(Rc::new(Sprite::new("A")));
        let mut input = ScriptedInput::new(vec![Controls::new(0, 1, false)]);
        let mut ship = ShipControl::new(10.0, 10.0);

        step(&mut ship, &mut world, &mut input);
        let (row_speed, column_speed) = ship.velocity();
        assert_eq!(row_speed, 0.0);
        assert!(column_speed > 0.0);
        assert_eq!(ship.position(), (10.0, 10.0 + column_speed));

        // Idle afterwards: the ship coasts while the speed fades.
        step(&mut ship, &mut world, &mut input);
        let (_, coasting) = ship.velocity();
        assert!(coasting > 0.0 && coasting < column_speed);
    }

    #[test]
    fn velocity_leaving_the_field_is_zeroed_per_axis() {
        // 5x5 ship at (10, 10), trying to jump to column 200 in a 50-wide field.
        let v = constrain_velocity((10.0, 10.0), (0.0, 190.0), (5, 5), (30, 50));
        assert_eq!(v, (0.0, 0.0));

        let v = constrain_velocity((10.0, 10.0), (1.0, 190.0), (5, 5), (30, 50));
        assert_eq!(v, (1.0, 0.0));
    }

    #[test]
    fn border_cells_are_off_limits() {
        // Moving onto row 0 / column 0 hits the border.
        assert_eq!(constrain_velocity((1.0, 1.0), (-1.0, -1.0), (2, 2), (20, 20)), (0.0, 0.0));
        // Last usable row: 20 - 1 (border) - 2 (height) = 17.
        assert_eq!(constrain_velocity((16.0, 5.0), (1.0, 0.0), (2, 2), (20, 20)), (1.0, 0.0));
        assert_eq!(constrain_velocity((17.0, 5.0), (1.0, 0.0), (2, 2), (20, 20)), (0.0, 0.0));
    }

    #[test]
    fn velocity_inside_the_field_is_kept() {
        assert_eq!(
            constrain_velocity((10.0, 10.0), (0.5, -1.5), (3, 3), (40, 80)),
            (0.5, -1.5)
        );
    }
}
