//! Core scene logic - cooperative tasks, shared world and collisions
//!
//! This crate has no terminal dependency. Everything runs on one thread:
//!
//! - **Deterministic**: a seeded [`SimpleRng`] drives every random choice
//! - **Lock-free by construction**: the [`World`] is handed to one task at a time as `&mut`
//! - **Testable**: the rendering surface and input are traits ([`Canvas`], [`InputSource`])
//!
//! # Module Structure
//!
//! - [`task`]: the [`Task`] trait, [`Step`] results and the [`Sleep`] countdown
//! - [`scheduler`]: one resumption per task per tick, deferred registration of spawned tasks
//! - [`world`]: obstacles, pending hits, ship sprite, epoch
//! - [`obstacle`]: identity-keyed bounding-box collision index
//! - [`physics`]: ship velocity model
//! - [`sprite`]: ASCII-art sprites and the clipping draw routine
//! - [`canvas`]: rendering surface and input source seams
//! - [`rng`]: seeded LCG
//!
//! # Example
//!
//! ```
//! use space_garbage_core::{FnTask, NoInput, Scheduler, SimpleRng, Step, World};
//! # use space_garbage_core::{Canvas, types::Emphasis};
//! # struct Blank;
//! # impl Canvas for Blank {
//! #     fn size(&self) -> (u16, u16) { (10, 10) }
//! #     fn write(&mut self, _: u16, _: u16, _: char, _: Emphasis) {}
//! #     fn present(&mut self) -> anyhow::Result<()> { Ok(()) }
//! # }
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.spawn(FnTask::new("tick-once", |cx| {
//!     cx.world.advance_epoch();
//!     Step::Done
//! }));
//!
//! let mut world = World::new(1957);
//! let mut rng = SimpleRng::new(1);
//! scheduler.sweep(&mut world, &mut Blank, &mut NoInput, &mut rng);
//!
//! assert_eq!(world.epoch(), 1958);
//! assert!(scheduler.is_empty());
//! ```

pub mod canvas;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod scheduler;
pub mod sprite;
pub mod task;
pub mod world;

pub use space_garbage_types as types;

pub use canvas::{Canvas, InputSource, NoInput, ScriptedInput};
pub use obstacle::{Obstacle, ObstacleId, ObstacleIndex};
pub use physics::{update_speed, update_speed_with, SpeedLimits};
pub use rng::SimpleRng;
pub use scheduler::Scheduler;
pub use sprite::{draw_frame, frame_size, Sprite};
pub use task::{FnTask, Sleep, Step, Task, TaskContext};
pub use world::World;
