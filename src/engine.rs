//! Engine layer for Tessera.
//!
//! Implements the puzzle rules:
//! - Board representation (row-major grid of tile values)
//! - Directional compaction and merging
//! - Tile spawning with a seeded PRNG
//! - Win/loss detection with absorbing terminal states

mod board;
mod invariants;
mod moves;
mod rng;
mod state;

pub use board::Board;
pub use invariants::{check_invariants, InvariantViolation, SANITY_MAX_TILE};
pub use moves::{compact, merge, Direction};
pub use state::{GameConfig, GameState, Status, DEFAULT_GRID_SIZE, DEFAULT_TARGET};

pub(crate) use rng::Rng;
