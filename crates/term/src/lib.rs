//! Terminal rendering surface.
//!
//! Tasks draw into a persistent [`FrameBuffer`]; once per tick the [`TerminalRenderer`] writes
//! the cells that changed since the previous frame to the terminal through crossterm.
//! The framebuffer on its own is an in-memory [`Canvas`](space_garbage_core::Canvas), which is
//! what the tests draw into.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
