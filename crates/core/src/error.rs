//! Errors raised while building a shape table.
//!
//! These describe defects in static data, not runtime conditions: a game never
//! produces one once its table has been built.

use thiserror::Error;

use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("no shape defined for {0:?}")]
    MissingKind(PieceKind),

    #[error("shape {0:?} is defined more than once")]
    DuplicateKind(PieceKind),

    #[error("shape {0:?} has no rotation states")]
    NoStates(PieceKind),

    #[error("shape {kind:?} state {state}: cell ({x}, {y}) lies outside the 4x4 box")]
    CellOutOfBounds {
        kind: PieceKind,
        state: usize,
        x: u8,
        y: u8,
    },

    #[error("shape {kind:?} state {state}: expected 4 distinct cells, found {found}")]
    WrongCellCount {
        kind: PieceKind,
        state: usize,
        found: u32,
    },

    #[error("shape {kind:?} state {state}: next state {next} is out of range ({len} states)")]
    NextOutOfRange {
        kind: PieceKind,
        state: usize,
        next: usize,
        len: usize,
    },

    #[error("shape {0:?}: rotation states do not form a single cycle")]
    BrokenCycle(PieceKind),

    #[error("shape {kind:?}: states {first} and {second} have the same mask")]
    DuplicateState {
        kind: PieceKind,
        first: usize,
        second: usize,
    },
}
