//! Tick scheduler: resumes every live task exactly once per tick.

use anyhow::Result;
use log::trace;

use crate::canvas::{Canvas, InputSource};
use crate::rng::SimpleRng;
use crate::task::{Step, Task, TaskContext};
use crate::world::World;

/// Owns the live tasks, in insertion order.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task; it is resumed from the next sweep on.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawn_boxed(Box::new(task));
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) {
        trace!("spawn {}", task.name());
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed sweeps.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Count live tasks with the given name.
    pub fn count(&self, name: &str) -> usize {
        self.tasks.iter().filter(|t| t.name() == name).count()
    }

    /// Resume every task that was live when the sweep started, once.
    ///
    /// Finished tasks are dropped. Tasks spawned during the sweep are appended afterwards, so
    /// they wait for the next sweep. Returns how many tasks finished.
    pub fn sweep(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        input: &mut dyn InputSource,
        rng: &mut SimpleRng,
    ) -> usize {
        let mut spawned: Vec<Box<dyn Task>> = Vec::new();
        let before = self.tasks.len();

        {
            let mut cx = TaskContext::new(world, canvas, input, rng, &mut spawned);
            self.tasks.retain_mut(|task| match task.resume(&mut cx) {
                Step::Continue => true,
                Step::Done => {
                    trace!("{} finished", task.name());
                    false
                }
            });
        }

        let finished = before - self.tasks.len();
        for task in spawned {
            self.spawn_boxed(task);
        }
        self.ticks += 1;
        finished
    }

    /// One full tick: sweep, then a single render pass.
    pub fn tick(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        input: &mut dyn InputSource,
        rng: &mut SimpleRng,
    ) -> Result<usize> {
        let finished = self.sweep(world, canvas, input, rng);
        canvas.present()?;
        Ok(finished)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::canvas::NoInput;
    use crate::task::FnTask;
    use crate::types::Emphasis;

    #[derive(Default)]
    struct NullCanvas {
        presents: usize,
    }

    impl Canvas for NullCanvas {
        fn size(&self) -> (u16, u16) {
            (24, 80)
        }

        fn write(&mut self, _row: u16, _column: u16, _symbol: char, _emphasis: Emphasis) {}

        fn present(&mut self) -> Result<()> {
            self.presents += 1;
            Ok(())
        }
    }

    struct Harness {
        world: World,
        canvas: NullCanvas,
        input: NoInput,
        rng: SimpleRng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                world: World::default(),
                canvas: NullCanvas::default(),
                input: NoInput,
                rng: SimpleRng::new(1),
            }
        }

        fn tick(&mut self, scheduler: &mut Scheduler) -> usize {
            scheduler
                .tick(&mut self.world, &mut self.canvas, &mut self.input, &mut self.rng)
                .unwrap()
        }
    }

    #[test]
    fn yield_once_then_done_is_resumed_twice() {
        let resumes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&resumes);
        let mut scheduler = Scheduler::new();
        scheduler.spawn(FnTask::new("once", move |_cx| {
            *counter.borrow_mut() += 1;
            if *counter.borrow() == 1 {
                Step::Continue
            } else {
                Step::Done
            }
        }));

        let mut h = Harness::new();
        assert_eq!(h.tick(&mut scheduler), 0);
        assert_eq!(h.tick(&mut scheduler), 1);
        assert!(scheduler.is_empty());
        h.tick(&mut scheduler);
        assert_eq!(*resumes.borrow(), 2);
        assert_eq!(h.canvas.presents, 3);
        assert_eq!(scheduler.tick_count(), 3);
    }

    #[test]
    fn spawned_task_waits_for_next_sweep() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let parent_log = Rc::clone(&log);
        let mut spawned_child = false;

        let mut scheduler = Scheduler::new();
        scheduler.spawn(FnTask::new("parent", move |cx| {
            let tick = cx.world.epoch();
            parent_log.borrow_mut().push(("parent", tick));
            if !spawned_child {
                spawned_child = true;
                let child_log = Rc::clone(&parent_log);
                cx.spawn(FnTask::new("child", move |cx| {
                    child_log.borrow_mut().push(("child", cx.world.epoch()));
                    Step::Done
                }));
            }
            Step::Continue
        }));

        let mut h = Harness::new();
        h.world.set_epoch(0);
        h.tick(&mut scheduler);
        assert_eq!(scheduler.count("child"), 1);
        h.world.set_epoch(1);
        h.tick(&mut scheduler);

        assert_eq!(
            *log.borrow(),
            vec![("parent", 0), ("parent", 1), ("child", 1)]
        );
        assert_eq!(scheduler.count("child"), 0);
    }

    #[test]
    fn insertion_order_is_resume_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        for name in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            scheduler.spawn(FnTask::new(name, move |_cx| {
                order.borrow_mut().push(name);
                Step::Done
            }));
        }

        let mut h = Harness::new();
        assert_eq!(h.tick(&mut scheduler), 3);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
