//! Stack Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `stack_tetris::{core,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use stack_tetris_core as core;
pub use stack_tetris_input as input;
pub use stack_tetris_term as term;
pub use stack_tetris_types as types;
