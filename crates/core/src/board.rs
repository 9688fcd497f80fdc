//! Board module - the grid of landed blocks
//!
//! The board is a 10x19 grid where each cell is empty or holds the kind of the
//! piece that landed there. Storage is a flat array, row-major, with row 0 at
//! the bottom: coordinates are `(x, y)` with `x` in 0..10 left to right and `y`
//! in 0..19 bottom to top.
//!
//! The falling piece is never written here until it lands. Anything outside
//! the grid reads as occupied, which is the only wall/floor check the rest of
//! the engine needs.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shapes::BLOCKS_PER_PIECE;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, usable as a const generic capacity
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Absolute cells written by one [`Board::commit`]
pub type CommittedCells = ArrayVec<(i8, i8), { BLOCKS_PER_PIECE as usize }>;

/// Rows removed by one [`Board::take_full_rows`], in removal order
pub type ClearedRows = ArrayVec<i8, BOARD_ROWS>;

/// The game board - 10 columns x 19 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    ///
    /// Games only change the grid through [`Board::commit`] and
    /// [`Board::take_full_rows`]; this is for building positions by hand.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True outside the grid or on a landed block
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right; `None` outside the board
    pub fn row(&self, y: i8) -> Option<&[Cell]> {
        let start = Self::index(0, y)?;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Write a landed piece into the grid.
    ///
    /// Returns the absolute cells that became occupied.
    ///
    /// # Panics
    ///
    /// If any target cell is already occupied or out of bounds. Callers check
    /// with [`Piece::can_translate`] first; reaching this is a bug.
    pub fn commit(&mut self, piece: &Piece) -> CommittedCells {
        let mut written = CommittedCells::new();
        for (x, y) in piece.cells() {
            assert!(
                !self.is_occupied(x, y),
                "commit of {:?} onto occupied cell ({}, {})",
                piece.kind(),
                x,
                y
            );
            written.push((x, y));
        }

        for &(x, y) in &written {
            self.set(x, y, Some(piece.kind()));
        }
        written
    }

    /// Remove every full row and return how many went.
    pub fn clear_full_rows(&mut self) -> usize {
        self.take_full_rows().len()
    }

    /// Remove every full row, returning the removed indices in removal order.
    ///
    /// Rows are scanned bottom to top. After a removal everything above drops
    /// by one and the same `y` is examined again, so each reported index is
    /// relative to the board at the moment of that removal: two adjacent full
    /// rows at the bottom come back as `[0, 0]`.
    pub fn take_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y: i8 = 0;
        while y < BOARD_HEIGHT as i8 {
            if self.is_row_full(y) {
                self.remove_row(y as usize);
                cleared.push(y);
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Drop every row above `y` by one and empty the top row
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within((y + 1) * width..BOARD_SIZE, y * width);
        for cell in &mut self.cells[BOARD_SIZE - width..] {
            *cell = None;
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
