//! Engine invariants - sanity checks that detect bugs.
//!
//! A correctly implemented move pipeline can never violate these; a
//! non-empty result indicates a bug in compaction, merging, or spawn
//! handling, not a gameplay condition.

use crate::engine::{GameState, Status};

/// Sanity bound: no legitimate game reaches a tile this large.
/// Doubling from 2 stays far below it on any practical grid.
pub const SANITY_MAX_TILE: u32 = 1 << 24;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all engine invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let board = state.board();

    // Cell count matches the declared grid size
    if board.cells().len() != board.cell_count() {
        violations.push(InvariantViolation {
            message: format!(
                "Board has {} cells, expected {}",
                board.cells().len(),
                board.cell_count()
            ),
        });
    }

    // Every tile is a power of two reachable by doubling from 2
    for (idx, &value) in board.cells().iter().enumerate() {
        if value == 0 {
            continue;
        }
        if value < 2 || !value.is_power_of_two() {
            violations.push(InvariantViolation {
                message: format!("Cell {idx} holds {value}, not a power of two >= 2"),
            });
        }
        if value > SANITY_MAX_TILE {
            violations.push(InvariantViolation {
                message: format!("Cell {idx} holds {value} > sanity max {SANITY_MAX_TILE}"),
            });
        }
    }

    // Status is consistent with the board
    match state.status() {
        Status::Won => {
            if board.max_tile() < state.target() {
                violations.push(InvariantViolation {
                    message: format!(
                        "Status is Won but max tile {} is below target {}",
                        board.max_tile(),
                        state.target()
                    ),
                });
            }
        }
        Status::Lost => {
            if !board.is_full() {
                violations.push(InvariantViolation {
                    message: "Status is Lost but the board has empty cells".to_string(),
                });
            }
            if board.max_tile() >= state.target() {
                violations.push(InvariantViolation {
                    message: "Status is Lost but a target tile exists (win takes precedence)"
                        .to_string(),
                });
            }
        }
        Status::InProgress => {
            if board.max_tile() >= state.target() {
                violations.push(InvariantViolation {
                    message: "Status is InProgress but a target tile exists".to_string(),
                });
            }
        }
    }

    violations
}
