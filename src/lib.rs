// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Tessera: a deterministic sliding-tile merge puzzle engine.
//!
//! This crate provides the rules engine of a 2048-style puzzle:
//! - Board state with directional moves, merges, and tile spawns
//! - Win/loss detection with absorbing terminal states
//! - Seeded, bit-exact reproducible games
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │    CLI (play TUI, sim batches)      │
//! ├─────────────────────────────────────┤
//! │       Playout harness (sim)         │
//! ├─────────────────────────────────────┤
//! │      Engine (board/moves/state)     │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine is the only part with real logic; the TUI and the batch
//! runner are thin consumers of its state.

pub mod engine;
pub mod error;
pub mod sim;

pub use error::{EngineError, EngineResult};

// Re-export key engine types at crate root for convenience
pub use engine::{Board, Direction, GameConfig, GameState, Status};
