//! Cooperative tasks.
//!
//! A task is a state machine advanced by [`Task::resume`]. Each call runs from the previous
//! suspension point to the next one and reports whether the task wants to be resumed again.
//! Waiting several ticks is built from one-tick suspensions with [`Sleep`]; the scheduler only
//! ever sees single steps.

use crate::canvas::{Canvas, InputSource};
use crate::rng::SimpleRng;
use crate::world::World;

/// Outcome of one resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Suspended; resume again next tick.
    Continue,
    /// Finished; drop the task.
    Done,
}

impl Step {
    pub fn is_done(self) -> bool {
        self == Step::Done
    }
}

/// A resumable unit of scene logic.
pub trait Task {
    /// Run until the next suspension point.
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "task"
    }
}

/// Everything a task may touch during a single resumption.
pub struct TaskContext<'a> {
    pub world: &'a mut World,
    pub canvas: &'a mut dyn Canvas,
    pub input: &'a mut dyn InputSource,
    pub rng: &'a mut SimpleRng,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        input: &'a mut dyn InputSource,
        rng: &'a mut SimpleRng,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            world,
            canvas,
            input,
            rng,
            spawned,
        }
    }

    /// Queue a new task. It is first resumed on the next tick.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }
}

/// Countdown for "suspend for N ticks".
///
/// `start(n)` is meant to be followed by returning [`Step::Continue`]; that return is the
/// first of the `n` suspensions and [`Sleep::tick`] swallows the remaining `n - 1` resumptions.
/// `start(0)` means no suspension at all and callers should keep running instead of returning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sleep {
    remaining: u32,
}

impl Sleep {
    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks.saturating_sub(1);
    }

    /// Consume one resumption if still sleeping. Returns `true` when the caller should
    /// suspend again without doing anything else.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// A task built from a closure, for one-off logic.
pub struct FnTask<F> {
    name: &'static str,
    f: F,
}

impl<F> FnTask<F>
where
    F: FnMut(&mut TaskContext<'_>) -> Step,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Task for FnTask<F>
where
    F: FnMut(&mut TaskContext<'_>) -> Step,
{
    fn resume(&mut self, cx: &mut TaskContext<'_>) -> Step {
        (self.f)(cx)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
