#![allow(dead_code)]

use std::rc::Rc;

use space_garbage::core::{Scheduler, ScriptedInput, SimpleRng, Sprite, Task, World};
use space_garbage::term::FrameBuffer;
use space_garbage::types::Controls;

/// Scheduler, world and an in-memory canvas driven tick by tick.
pub struct Harness {
    pub scheduler: Scheduler,
    pub world: World,
    pub fb: FrameBuffer,
    pub input: ScriptedInput,
    pub rng: SimpleRng,
}

impl Harness {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            scheduler: Scheduler::new(),
            world: World::default(),
            fb: FrameBuffer::new(columns, rows),
            input: ScriptedInput::default(),
            rng: SimpleRng::new(42),
        }
    }

    pub fn with_input(mut self, samples: Vec<Controls>) -> Self {
        self.input = ScriptedInput::new(samples);
        self
    }

    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.scheduler.spawn(task);
    }

    pub fn tick(&mut self) -> usize {
        self.scheduler
            .tick(&mut self.world, &mut self.fb, &mut self.input, &mut self.rng)
            .expect("in-memory present never fails")
    }

    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Tick until `done` holds, at most `limit` times. Returns the ticks taken.
    pub fn run_until(&mut self, limit: usize, mut done: impl FnMut(&Harness) -> bool) -> usize {
        for n in 1..=limit {
            self.tick();
            if done(&*self) {
                return n;
            }
        }
        panic!("condition not reached within {} ticks", limit);
    }

    /// No visible symbol anywhere on the canvas.
    pub fn is_blank(&self) -> bool {
        self.fb.cells().iter().all(|c| c.ch == ' ')
    }

    pub fn char_at(&self, row: u16, column: u16) -> char {
        self.fb.get(column, row).map(|c| c.ch).unwrap_or(' ')
    }
}

pub fn sprite(text: &str) -> Rc<Sprite> {
    Rc::new(Sprite::new(text))
}
