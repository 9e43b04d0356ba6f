//! Space garbage (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the integration tests and the
//! benchmarks can use `space_garbage::{core,engine,input,term,types}`.

pub use space_garbage_core as core;
pub use space_garbage_engine as engine;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;
