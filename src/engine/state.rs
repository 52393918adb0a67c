//! Game state and the move pipeline.

use crate::engine::moves::{compact, merge};
use crate::engine::rng::Rng;
use crate::engine::{Board, Direction};
use crate::error::{EngineError, EngineResult};

/// Default side length of the grid.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Default tile value that wins the game.
pub const DEFAULT_TARGET: u32 = 1024;

/// Value of every spawned tile.
const SPAWN_VALUE: u32 = 2;

/// Configuration for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square grid (minimum 2).
    pub grid_size: usize,
    /// Tile value that wins the game (minimum 1).
    pub target: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            target: DEFAULT_TARGET,
        }
    }
}

impl GameConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is below 2 or the target is 0.
    pub fn validate(&self) -> EngineResult<()> {
        if self.grid_size < 2 {
            return Err(EngineError::InvalidGridSize {
                grid_size: self.grid_size,
            });
        }
        if self.target == 0 {
            return Err(EngineError::InvalidTarget {
                target: self.target,
            });
        }
        Ok(())
    }
}

/// Game outcome state.
///
/// Terminal states (`Won`, `Lost`) absorb further moves; the caller
/// must construct a new game to continue playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// Some tile reached the target value.
    Won,
    /// The board is full and the target was not reached.
    Lost,
}

impl Status {
    /// Check whether this is a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Complete game state: board, score, target, and the spawn PRNG.
///
/// The state is mutated only through [`GameState::apply_move`], which
/// takes `&self` and returns the next state, so readers of the
/// previous value never observe a half-updated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Accumulated score (sum of all merged values).
    score: u32,
    /// Tile value that wins the game.
    target: u32,
    /// Current outcome state.
    status: Status,
    /// PRNG driving tile spawns.
    rng: Rng,
}

impl GameState {
    /// Create a new game: an empty board, score 0, and two spawned
    /// tiles.
    ///
    /// Terminal status is evaluated after the spawns, so a degenerate
    /// target of 2 or less yields an immediately won game.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. No partial
    /// state is constructed.
    pub fn new(config: &GameConfig, seed: u64) -> EngineResult<Self> {
        config.validate()?;

        // validate() guarantees the size is accepted
        let board = Board::new(config.grid_size).ok_or(EngineError::InvalidGridSize {
            grid_size: config.grid_size,
        })?;

        let mut state = Self {
            board,
            score: 0,
            target: config.target,
            status: Status::InProgress,
            rng: Rng::new(seed),
        };

        state.spawn();
        state.spawn();
        state.evaluate_status();

        Ok(state)
    }

    /// Resume a game from an explicit board position.
    ///
    /// Score starts at 0 and terminal status is evaluated immediately,
    /// so a board that already contains a target tile is `Won` and a
    /// full board without one is `Lost`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is 0.
    pub fn from_board(board: Board, target: u32, seed: u64) -> EngineResult<Self> {
        if target == 0 {
            return Err(EngineError::InvalidTarget { target });
        }

        let mut state = Self {
            board,
            score: 0,
            target,
            status: Status::InProgress,
            rng: Rng::new(seed),
        };
        state.evaluate_status();

        Ok(state)
    }

    /// Apply a directional move and return the resulting state.
    ///
    /// Terminal states absorb moves: the returned state is identical
    /// to the input (cells, score, status, and PRNG all unchanged).
    /// Otherwise the pipeline runs compact, merge, compact, spawn,
    /// compact, then re-evaluates the outcome. A move that shifts no
    /// tile is still a valid move and still spawns.
    #[must_use]
    pub fn apply_move(&self, direction: Direction) -> GameState {
        let mut next = self.clone();
        if self.status.is_terminal() {
            return next;
        }

        compact(&mut next.board, direction);
        let points = merge(&mut next.board, direction);
        next.score = next.score.saturating_add(points);
        compact(&mut next.board, direction);
        next.spawn();
        compact(&mut next.board, direction);
        next.evaluate_status();

        next
    }

    /// Place one `2` in a uniformly random empty cell.
    ///
    /// Skipped entirely when the board is full, so a full board never
    /// loops on resampling.
    fn spawn(&mut self) {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return;
        }

        let index = empty[self.rng.next_index(empty.len())];
        self.board.set(index, SPAWN_VALUE);
    }

    /// Recompute the outcome state.
    ///
    /// Win takes precedence over loss: a full board that contains a
    /// target tile is `Won`, not `Lost`.
    fn evaluate_status(&mut self) {
        if self.board.max_tile() >= self.target {
            self.status = Status::Won;
        } else if self.board.is_full() {
            self.status = Status::Lost;
        } else {
            self.status = Status::InProgress;
        }
    }

    /// Get the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell values in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        self.board.cells()
    }

    /// Get the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Get the winning tile value.
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Get the current outcome state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
