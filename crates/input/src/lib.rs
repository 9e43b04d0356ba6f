//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Controls`](crate::types::Controls) samples and provides
//! [`KeyboardInput`], the non-blocking [`InputSource`](space_garbage_core::InputSource) used by
//! the binary. The mapping works without key-release events: every press or auto-repeat is one
//! nudge of the ship.

pub mod handler;
pub mod map;

pub use space_garbage_types as types;

pub use handler::KeyboardInput;
pub use map::{handle_key_event, should_quit};
