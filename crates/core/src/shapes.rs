//! Shapes module - rotation-state tables for the seven tetrominoes
//!
//! Every kind owns an ordered list of rotation states. A state is a 4x4
//! occupancy mask plus the index of the state that follows it; rotating a
//! piece just walks that cycle. There are no wall kicks: a rotation either fits
//! at the current anchor or it does not happen.
//!
//! Coordinates inside the box are `(x, y)` with `y` growing upwards, matching
//! the board.
//!
//! The table is built once and handed out as [`Rotations`], a reference-counted
//! slice, so every piece of the same kind shares one copy.

use std::sync::Arc;

use crate::error::ShapeError;
use crate::types::PieceKind;

/// Side length of the bounding box of a rotation state
pub const BOX_SIZE: u8 = 4;

/// Number of blocks in every tetromino
pub const BLOCKS_PER_PIECE: u32 = 4;

/// 4x4 occupancy bitmap, bit `y * 4 + x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask(u16);

impl Mask {
    pub const EMPTY: Mask = Mask(0);

    /// Mask with `(x, y)` added, or `None` if the cell is outside the box
    pub fn with(self, x: u8, y: u8) -> Option<Mask> {
        if x >= BOX_SIZE || y >= BOX_SIZE {
            return None;
        }
        Some(Mask(self.0 | 1 << (y * BOX_SIZE + x)))
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, x: u8, y: u8) -> bool {
        x < BOX_SIZE && y < BOX_SIZE && self.0 & (1 << (y * BOX_SIZE + x)) != 0
    }

    /// Number of occupied cells
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Occupied offsets, row by row from the bottom
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        (0..16u8)
            .filter(move |bit| self.0 & (1 << bit) != 0)
            .map(|bit| ((bit % BOX_SIZE) as i8, (bit / BOX_SIZE) as i8))
    }

    /// Occupancy as a grid indexed `[y][x]`
    pub fn to_grid(self) -> [[bool; 4]; 4] {
        let mut grid = [[false; 4]; 4];
        for (x, y) in self.cells() {
            grid[y as usize][x as usize] = true;
        }
        grid
    }
}

/// One orientation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationState {
    mask: Mask,
    next: usize,
}

impl RotationState {
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Index of the state reached by one rotation
    pub fn next(&self) -> usize {
        self.next
    }
}

/// Immutable rotation cycle of one kind, shared by every piece of that kind
pub type Rotations = Arc<[RotationState]>;

/// Static description of a rotation state: its cells and its successor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateDef {
    pub cells: &'static [(u8, u8)],
    pub next: usize,
}

/// Static description of a kind's rotation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub states: &'static [StateDef],
}

/// Canonical shapes. The I, S and Z pieces flip between two states, O never
/// changes, and J, L and T walk through four.
pub const STANDARD_SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        states: &[
            StateDef {
                cells: &[(1, 0), (1, 1), (1, 2), (1, 3)],
                next: 1,
            },
            StateDef {
                cells: &[(0, 1), (1, 1), (2, 1), (3, 1)],
                next: 0,
            },
        ],
    },
    ShapeDef {
        kind: PieceKind::J,
        states: &[
            StateDef {
                cells: &[(1, 1), (2, 1), (2, 2), (2, 3)],
                next: 1,
            },
            StateDef {
                cells: &[(0, 2), (0, 1), (1, 1), (2, 1)],
                next: 2,
            },
            StateDef {
                cells: &[(2, 3), (1, 3), (1, 2), (1, 1)],
                next: 3,
            },
            StateDef {
                cells: &[(2, 1), (2, 2), (1, 2), (0, 2)],
                next: 0,
            },
        ],
    },
    ShapeDef {
        kind: PieceKind::L,
        states: &[
            StateDef {
                cells: &[(1, 1), (0, 1), (0, 2), (0, 3)],
                next: 1,
            },
            StateDef {
                cells: &[(0, 1), (0, 2), (1, 2), (2, 2)],
                next: 2,
            },
            StateDef {
                cells: &[(0, 3), (1, 3), (1, 2), (1, 1)],
                next: 3,
            },
            StateDef {
                cells: &[(2, 2), (2, 1), (1, 1), (0, 1)],
                next: 0,
            },
        ],
    },
    ShapeDef {
        kind: PieceKind::O,
        states: &[StateDef {
            cells: &[(1, 2), (2, 2), (1, 3), (2, 3)],
            next: 0,
        }],
    },
    ShapeDef {
        kind: PieceKind::S,
        states: &[
            StateDef {
                cells: &[(0, 2), (1, 2), (1, 3), (2, 3)],
                next: 1,
            },
            StateDef {
                cells: &[(1, 3), (1, 2), (2, 2), (2, 1)],
                next: 0,
            },
        ],
    },
    ShapeDef {
        kind: PieceKind::T,
        states: &[
            StateDef {
                cells: &[(1, 3), (0, 2), (1, 2), (2, 2)],
                next: 1,
            },
            StateDef {
                cells: &[(1, 2), (0, 3), (0, 2), (0, 1)],
                next: 2,
            },
            StateDef {
                cells: &[(1, 2), (0, 3), (1, 3), (2, 3)],
                next: 3,
            },
            StateDef {
                cells: &[(0, 2), (1, 1), (1, 2), (1, 3)],
                next: 0,
            },
        ],
    },
    ShapeDef {
        kind: PieceKind::Z,
        states: &[
            StateDef {
                cells: &[(0, 3), (1, 3), (1, 2), (2, 2)],
                next: 1,
            },
            StateDef {
                cells: &[(2, 3), (2, 2), (1, 2), (1, 1)],
                next: 0,
            },
        ],
    },
];

/// Validated rotation cycles for all seven kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTable {
    /// Indexed by [`PieceKind::index`]
    rotations: Vec<Rotations>,
}

impl ShapeTable {
    /// Build the canonical table.
    ///
    /// # Panics
    ///
    /// If [`STANDARD_SHAPES`] is malformed. That is a bug in the static data,
    /// so it is reported at startup rather than carried around as a `Result`.
    pub fn standard() -> Self {
        match Self::from_defs(&STANDARD_SHAPES) {
            Ok(table) => table,
            Err(err) => panic!("standard shape table is malformed: {err}"),
        }
    }

    /// Validate and build a table. Every kind must appear exactly once.
    pub fn from_defs(defs: &[ShapeDef]) -> Result<Self, ShapeError> {
        let mut slots: [Option<Rotations>; 7] = Default::default();

        for def in defs {
            let slot = &mut slots[def.kind.index()];
            if slot.is_some() {
                return Err(ShapeError::DuplicateKind(def.kind));
            }
            *slot = Some(build_rotations(def)?);
        }

        let mut rotations = Vec::with_capacity(PieceKind::ALL.len());
        for (kind, slot) in PieceKind::ALL.into_iter().zip(slots) {
            rotations.push(slot.ok_or(ShapeError::MissingKind(kind))?);
        }

        Ok(Self { rotations })
    }

    /// Shared rotation cycle of `kind` (a reference-count bump, not a copy)
    pub fn rotations(&self, kind: PieceKind) -> Rotations {
        Arc::clone(&self.rotations[kind.index()])
    }

    pub fn state_count(&self, kind: PieceKind) -> usize {
        self.rotations[kind.index()].len()
    }
}

impl Default for ShapeTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn build_rotations(def: &ShapeDef) -> Result<Rotations, ShapeError> {
    let kind = def.kind;
    let len = def.states.len();
    if len == 0 {
        return Err(ShapeError::NoStates(kind));
    }

    let mut states = Vec::with_capacity(len);
    for (state, sd) in def.states.iter().enumerate() {
        let mut mask = Mask::EMPTY;
        for &(x, y) in sd.cells {
            mask = mask
                .with(x, y)
                .ok_or(ShapeError::CellOutOfBounds { kind, state, x, y })?;
        }
        if mask.count() != BLOCKS_PER_PIECE {
            return Err(ShapeError::WrongCellCount {
                kind,
                state,
                found: mask.count(),
            });
        }
        if sd.next >= len {
            return Err(ShapeError::NextOutOfRange {
                kind,
                state,
                next: sd.next,
                len,
            });
        }
        states.push(RotationState {
            mask,
            next: sd.next,
        });
    }

    // Walking `next` from state 0 must visit every state once and come back.
    let mut seen = vec![false; len];
    let mut at = 0;
    for _ in 0..len {
        if seen[at] {
            return Err(ShapeError::BrokenCycle(kind));
        }
        seen[at] = true;
        at = states[at].next;
    }
    if at != 0 {
        return Err(ShapeError::BrokenCycle(kind));
    }

    for first in 0..len {
        for second in first + 1..len {
            if states[first].mask == states[second].mask {
                return Err(ShapeError::DuplicateState {
                    kind,
                    first,
                    second,
                });
            }
        }
    }

    Ok(states.into())
}
