//! Piece module - the falling tetromino
//!
//! A piece is a kind, its shared rotation cycle, the index of the current
//! state and an anchor on the board. The anchor is the bottom-left corner of
//! the 4x4 box, so a mask cell `(cx, cy)` lands on `(x + cx, y + cy)`.
//!
//! Checking and moving are separate calls: `can_translate`/`can_rotate` ask the
//! board, `translate`/`rotate` just mutate. Callers decide what to do with a
//! failed check.

use crate::board::Board;
use crate::shapes::{Mask, Rotations};
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotations: Rotations,
    state: usize,
    x: i8,
    y: i8,
}

impl Piece {
    /// Create a piece in its first rotation state with the box anchored at `position`.
    ///
    /// # Panics
    ///
    /// If `rotations` is empty.
    pub fn new(kind: PieceKind, rotations: Rotations, position: (i8, i8)) -> Self {
        assert!(!rotations.is_empty(), "{:?} has no rotation states", kind);
        Self {
            kind,
            rotations,
            state: 0,
            x: position.0,
            y: position.1,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Anchor of the 4x4 box in board coordinates
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn state_index(&self) -> usize {
        self.state
    }

    pub fn state_count(&self) -> usize {
        self.rotations.len()
    }

    pub fn current_mask(&self) -> Mask {
        self.rotations[self.state].mask()
    }

    fn next_state(&self) -> usize {
        self.rotations[self.state].next()
    }

    /// Absolute board cells covered by the current state
    ///
    /// Coordinates saturate at the `i8` range; a saturated cell is off the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.current_mask()
            .cells()
            .map(move |(cx, cy)| (x.saturating_add(cx), y.saturating_add(cy)))
    }

    /// A cell whose coordinate does not fit in `i8` is off the board, so occupied.
    fn fits(board: &Board, mask: Mask, x: i8, y: i8) -> bool {
        mask.cells()
            .all(|(cx, cy)| match (x.checked_add(cx), y.checked_add(cy)) {
                (Some(bx), Some(by)) => !board.is_occupied(bx, by),
                _ => false,
            })
    }

    /// Would the piece fit after moving by `(dx, dy)`?
    ///
    /// `can_translate(board, 0, 0)` asks whether the piece fits where it is.
    pub fn can_translate(&self, board: &Board, dx: i8, dy: i8) -> bool {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Self::fits(board, self.current_mask(), x, y),
            _ => false,
        }
    }

    /// Would the next rotation state fit at the current anchor?
    pub fn can_rotate(&self, board: &Board) -> bool {
        let next = self.rotations[self.next_state()].mask();
        Self::fits(board, next, self.x, self.y)
    }

    /// Move the anchor. Does not validate; the anchor saturates at the `i8` range.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Advance to the next rotation state, wrapping after the last. Does not validate.
    pub fn rotate(&mut self) {
        self.state = self.next_state();
    }

    /// Drop as far as the board allows, in a single move.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self, board: &Board) -> i8 {
        let mut offset: i8 = 0;
        while let Some(next) = offset.checked_sub(1) {
            if !self.can_translate(board, 0, next) {
                break;
            }
            offset = next;
        }
        if offset != 0 {
            self.translate(0, offset);
        }
        -offset
    }
}
