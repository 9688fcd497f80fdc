//! Terminal presentation layer.
//!
//! Renders a [`core::GameState`] into a framebuffer of styled glyphs and
//! flushes only the glyphs that changed since the previous frame. The game
//! core never sees any of this; the view reads its public accessors each
//! frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stack_tetris_core as core;
pub use stack_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
