//! Playout harness: seeded end-to-end games with a random policy.
//!
//! Provides a pure function interface: `(seed, config) -> GameSummary`.
//! Given the same seed and configuration, a playout always produces
//! the same summary.

use crate::engine::{Direction, GameConfig, GameState, Rng, Status};
use crate::error::EngineResult;
use serde::Serialize;

/// Seed perturbation separating the move policy stream from the
/// engine's spawn stream.
const POLICY_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Game configuration (grid size and win target).
    pub game: GameConfig,
    /// Safety cap on moves per game; a playout still running after
    /// this many moves is reported as unfinished.
    pub max_moves: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_moves: 10_000,
        }
    }
}

/// Result of a single playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// The seed used for this game.
    pub seed: u64,
    /// Final outcome (`InProgress` only when the move cap was hit).
    #[serde(serialize_with = "serialize_status")]
    pub status: Status,
    /// Final score.
    pub score: u32,
    /// Moves applied before the game ended.
    pub moves: u32,
    /// Largest tile reached.
    pub max_tile: u32,
}

/// Serialize a status as its lowercase name.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_status<S>(status: &Status, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let name = match status {
        Status::InProgress => "in_progress",
        Status::Won => "won",
        Status::Lost => "lost",
    };
    serializer.serialize_str(name)
}

/// Run one complete game with uniformly random moves.
///
/// # Determinism
///
/// Given the same seed and configuration, this function always
/// produces the same summary. The move policy draws from its own
/// PRNG stream so policy and spawn randomness never interleave.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_playout(seed: u64, config: &SimConfig) -> EngineResult<GameSummary> {
    let mut state = GameState::new(&config.game, seed)?;
    let mut policy = Rng::new(seed ^ POLICY_SEED_SALT);
    let mut moves = 0u32;

    while !state.is_over() && moves < config.max_moves {
        let direction = Direction::all()[policy.next_index(4)];
        state = state.apply_move(direction);
        moves += 1;
    }

    Ok(GameSummary {
        seed,
        status: state.status(),
        score: state.score(),
        moves,
        max_tile: state.board().max_tile(),
    })
}
