//! Scene director: builds the initial task set and drives the tick loop.

use anyhow::Result;
use log::info;

use space_garbage_core::{Canvas, InputSource, Scheduler, SimpleRng, World};

use crate::assets::SceneAssets;
use crate::config::SceneConfig;
use crate::epoch::{EpochAdvance, EpochCaption};
use crate::garbage::GarbageSpawner;
use crate::overlay::ObstacleOverlay;
use crate::ship::{ShipAnimation, ShipControl};
use crate::stars::Blink;
use crate::types::{Emphasis, STAR_SYMBOLS};

/// Owns the scheduler, the world and the RNG of one running scene.
pub struct Scene {
    config: SceneConfig,
    scheduler: Scheduler,
    world: World,
    rng: SimpleRng,
}

impl Scene {
    /// Seed the sky, the ship, the garbage spawner and the year tasks for a canvas of
    /// `canvas_size` (`(rows, columns)`).
    pub fn new(config: SceneConfig, assets: SceneAssets, canvas_size: (u16, u16)) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let mut world = World::new(config.start_year);
        let mut scheduler = Scheduler::new();
        let (rows, columns) = canvas_size;

        let symbols: Vec<char> = STAR_SYMBOLS.chars().collect();
        for _ in 0..config.stars {
            let row = rng.range_inclusive(1, rows as i32 - 2).max(0) as u16;
            let column = rng.range_inclusive(1, columns as i32 - 2).max(0) as u16;
            let symbol = rng.choose(&symbols).copied().unwrap_or('*');
            let offset = rng.next_range(config.stars as u32 + 1);
            scheduler.spawn(Blink::new(row, column, symbol, offset));
        }

        if let Some(first) = assets.rocket.first() {
            world.set_ship_sprite(first.clone());
        }
        scheduler.spawn(ShipAnimation::new(assets.rocket, config.ship_frame_ticks));
        scheduler.spawn(
            ShipControl::new((rows / 2) as f64, (columns / 2) as f64)
                .with_fire_speed(config.fire_row_speed, config.fire_column_speed),
        );
        scheduler.spawn(GarbageSpawner::new(assets.garbage, config.garbage_speed));
        scheduler.spawn(EpochAdvance::new(config.ticks_per_year));
        scheduler.spawn(EpochCaption::new());
        if config.show_obstacles {
            scheduler.spawn(ObstacleOverlay::new());
        }

        info!(
            "scene ready: seed={} canvas={}x{} tasks={} year={}",
            config.seed,
            rows,
            columns,
            scheduler.len(),
            world.epoch()
        );

        Self {
            config,
            scheduler,
            world,
            rng,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// One tick: resume every task once, redraw the border, present the frame.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, input: &mut dyn InputSource) -> Result<usize> {
        let finished = self
            .scheduler
            .sweep(&mut self.world, canvas, input, &mut self.rng);
        draw_border(canvas);
        canvas.present()?;
        Ok(finished)
    }

    /// Tick until the input source asks to quit, waiting one tick interval after every sweep.
    pub fn run(&mut self, canvas: &mut dyn Canvas, input: &mut dyn InputSource) -> Result<()> {
        let interval = self.config.tick_interval();
        loop {
            self.tick(canvas, input)?;
            input.wait(interval)?;
            if input.quit_requested() {
                info!(
                    "quit after {} ticks in year {}",
                    self.scheduler.tick_count(),
                    self.world.epoch()
                );
                return Ok(());
            }
        }
    }
}

/// Box frame around the whole canvas, minus the bottom-right corner.
pub fn draw_border(canvas: &mut dyn Canvas) {
    let (rows, columns) = canvas.size();
    if rows < 2 || columns < 2 {
        return;
    }
    let (last_row, last_column) = (rows - 1, columns - 1);

    for column in 1..last_column {
        canvas.write(0, column, '─', Emphasis::Normal);
        canvas.write(last_row, column, '─', Emphasis::Normal);
    }
    for row in 1..last_row {
        canvas.write(row, 0, '│', Emphasis::Normal);
        canvas.write(row, last_column, '│', Emphasis::Normal);
    }
    canvas.write(0, 0, '┌', Emphasis::Normal);
    canvas.write(0, last_column, '┐', Emphasis::Normal);
    canvas.write(last_row, 0, '└', Emphasis::Normal);
    // The bottom-right cell is left alone: terminals scroll when it is written.
}
