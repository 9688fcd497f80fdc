//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has **zero
//! dependencies** on terminals, rendering or I/O:
//!
//! - **Deterministic**: the random source is injected, so a seed reproduces a game
//! - **Testable**: each rule can be exercised directly on a [`Board`] and [`Piece`]
//! - **Portable**: any frontend can drive it with actions and elapsed time
//!
//! # Module Structure
//!
//! - [`shapes`]: rotation-state tables for the seven tetrominoes
//! - [`board`]: 10x19 grid with collision queries and row clearing
//! - [`piece`]: the falling piece; separate validity checks and moves
//! - [`spawner`]: uniform random pieces with a one-piece preview
//! - [`game_state`]: gravity clock, input actions, landing and game over
//! - [`error`]: shape table defects
//!
//! # Rules
//!
//! - Out-of-bounds cells count as occupied; that is the only wall and floor.
//! - Rotation walks a fixed cycle of states at the current anchor. No wall kicks.
//! - A piece lands on the first gravity step it cannot take. Dropping only moves it.
//! - The game ends when a new piece does not fit at the spawn anchor.
//!
//! # Example
//!
//! ```
//! use stack_tetris_core::GameState;
//! use stack_tetris_types::{GameAction, GRAVITY_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::Drop);
//!
//! // The next gravity step lands the piece.
//! game.tick(GRAVITY_INTERVAL_MS);
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(game.take_last_event().is_some());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod shapes;
pub mod spawner;

pub use stack_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, CommittedCells};
pub use error::ShapeError;
pub use game_state::{GameState, LandingEvent};
pub use piece::Piece;
pub use shapes::{Mask, RotationState, Rotations, ShapeTable};
pub use spawner::Spawner;
