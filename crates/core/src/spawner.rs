//! Spawner module - uniform random piece generation with one preview
//!
//! Every draw picks one of the seven kinds with equal probability. The random
//! source is injected, so a seeded generator reproduces the exact sequence of
//! pieces.
//!
//! The spawner always holds the next kind to be played, which the presentation
//! layer shows as a preview. [`Spawner::next`] promotes it to a piece at the
//! spawn anchor and draws a fresh one.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::piece::Piece;
use crate::shapes::ShapeTable;
use crate::types::{PieceKind, SPAWN_POSITION};

#[derive(Debug, Clone)]
pub struct Spawner<R> {
    table: ShapeTable,
    rng: R,
    uniform: Uniform<usize>,
    preview: PieceKind,
}

impl<R: Rng> Spawner<R> {
    /// Create a spawner and draw the first preview
    pub fn new(table: ShapeTable, mut rng: R) -> Self {
        let uniform = Uniform::from(0..PieceKind::ALL.len());
        let preview = PieceKind::ALL[uniform.sample(&mut rng)];
        Self {
            table,
            rng,
            uniform,
            preview,
        }
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.uniform.sample(&mut self.rng)]
    }

    /// Hand out the previewed piece and draw a new preview.
    ///
    /// Returns the piece and the kind now waiting behind it.
    pub fn next(&mut self) -> (Piece, PieceKind) {
        let piece = self.build(self.preview);
        self.preview = self.draw();
        (piece, self.preview)
    }
}

impl<R> Spawner<R> {
    /// Kind that the next call to [`Spawner::next`] will hand out
    pub fn peek(&self) -> PieceKind {
        self.preview
    }

    /// Build the previewed piece at the spawn anchor without consuming it.
    pub fn preview_piece(&self) -> Piece {
        self.build(self.preview)
    }

    pub fn table(&self) -> &ShapeTable {
        &self.table
    }

    fn build(&self, kind: PieceKind) -> Piece {
        Piece::new(kind, self.table.rotations(kind), SPAWN_POSITION)
    }
}
