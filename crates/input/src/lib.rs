//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Actions are
//! edge-triggered: only key presses produce one, auto-repeat and release
//! events are dropped.

pub mod map;

pub use stack_tetris_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
