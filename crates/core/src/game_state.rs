//! Game state module - the tick/input controller
//!
//! Ties the spawner, the falling piece and the board together. Two kinds of
//! event drive it:
//!
//! - **Gravity ticks**: [`GameState::tick`] accumulates elapsed time. Once the
//!   accumulator reaches the gravity interval exactly one gravity step runs
//!   and the accumulator goes back to zero (no catch-up for slow frames).
//! - **Actions**: [`GameState::apply_action`] applies a discrete input at once,
//!   independent of the gravity clock. Moves that do not fit are ignored.
//!
//! A gravity step that cannot move the piece down lands it: the piece is
//! written into the board, full rows are removed, and the previewed piece is
//! spawned. If that piece does not fit at the spawn anchor the game is over.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::board::{Board, ClearedRows, CommittedCells};
use crate::piece::Piece;
use crate::shapes::ShapeTable;
use crate::spawner::Spawner;
use crate::types::{GameAction, GameConfig, GameStatus, PieceKind};

/// What changed on the board when a piece landed.
///
/// The presentation layer redraws from this instead of diffing the grid:
/// `cells` became occupied, then each row in `cleared_rows` was removed in
/// order (see [`Board::take_full_rows`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingEvent {
    pub kind: PieceKind,
    pub cells: CommittedCells,
    pub cleared_rows: ClearedRows,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    current: Option<Piece>,
    spawner: Spawner<R>,
    status: GameStatus,
    config: GameConfig,
    gravity_timer_ms: u32,
    pieces_spawned: u32,
    rows_cleared: u32,
    /// Last landing (consumed by observers).
    last_event: Option<LandingEvent>,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    /// Create a game from a config; without a seed one is drawn from the OS.
    ///
    /// Callers validate `config` first (see [`GameState::with_parts`]).
    pub fn with_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(ShapeTable::standard(), rng, config)
    }
}

impl<R> GameState<R> {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece; `None` once the game is over
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Kind of the piece that spawns after the current one lands
    pub fn preview(&self) -> PieceKind {
        self.spawner.peek()
    }

    /// The previewed piece as it will appear at the spawn anchor
    pub fn preview_piece(&self) -> Piece {
        self.spawner.preview_piece()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Rows removed since the game started
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }
}

impl<R: Rng> GameState<R> {
    /// Create a game from its parts and spawn the first piece.
    ///
    /// `config` must pass [`GameConfig::validate`]; a zero gravity interval
    /// would run a gravity step on every tick. Debug builds assert this.
    pub fn with_parts(table: ShapeTable, rng: R, config: GameConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid game config: {:?}",
            config
        );
        let mut state = Self {
            board: Board::new(),
            current: None,
            spawner: Spawner::new(table, rng),
            status: GameStatus::Playing,
            config,
            gravity_timer_ms: 0,
            pieces_spawned: 0,
            rows_cleared: 0,
            last_event: None,
        };
        info!(
            gravity_interval_ms = config.gravity_interval_ms,
            "game started"
        );
        state.spawn_piece();
        state
    }

    /// Promote the previewed piece. Ends the game if it does not fit.
    fn spawn_piece(&mut self) -> bool {
        let candidate = self.spawner.preview_piece();
        if !candidate.can_translate(&self.board, 0, 0) {
            self.status = GameStatus::GameOver;
            self.current = None;
            info!(
                kind = ?candidate.kind(),
                pieces = self.pieces_spawned,
                rows = self.rows_cleared,
                "spawn blocked, game over"
            );
            return false;
        }

        let (piece, preview) = self.spawner.next();
        trace!(kind = ?piece.kind(), ?preview, "spawned piece");
        self.current = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    /// Main game tick - advance the gravity clock by `elapsed_ms`.
    ///
    /// The clock restarts after every gravity step, landings included, so a
    /// freshly spawned piece waits a full interval before its first fall.
    ///
    /// Returns true when a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.config.gravity_interval_ms {
            return false;
        }

        self.gravity_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Move the piece down one row, or land it if it cannot move.
    fn gravity_step(&mut self) {
        let Some(current) = self.current.as_mut() else {
            return;
        };

        if current.can_translate(&self.board, 0, -1) {
            current.translate(0, -1);
            trace!(position = ?current.position(), "gravity step");
            return;
        }

        self.land();
    }

    /// Write the current piece into the board, clear rows, spawn the next one.
    fn land(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let cells = self.board.commit(&piece);
        let cleared_rows = self.board.take_full_rows();
        self.rows_cleared = self
            .rows_cleared
            .wrapping_add(cleared_rows.len() as u32);

        debug!(
            kind = ?piece.kind(),
            position = ?piece.position(),
            rows_cleared = cleared_rows.len(),
            "piece landed"
        );

        self.last_event = Some(LandingEvent {
            kind: piece.kind(),
            cells,
            cleared_rows,
        });

        self.spawn_piece();
    }

    /// Apply a game action.
    ///
    /// Returns true if the piece moved or rotated. Actions that do not fit,
    /// and every action after game over, are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(current) = self.current.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveLeft => try_translate(current, &self.board, -1),
            GameAction::MoveRight => try_translate(current, &self.board, 1),
            GameAction::Rotate => {
                if current.can_rotate(&self.board) {
                    current.rotate();
                    true
                } else {
                    false
                }
            }
            GameAction::Drop => current.hard_drop(&self.board) > 0,
        }
    }
}

fn try_translate(piece: &mut Piece, board: &Board, dx: i8) -> bool {
    if piece.can_translate(board, dx, 0) {
        piece.translate(dx, 0);
        true
    } else {
        false
    }
}
