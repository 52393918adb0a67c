//! Error types for the puzzle engine.

use std::fmt;

/// Errors raised when constructing a game from invalid configuration.
///
/// All engine operations on a validly constructed game are total
/// functions; configuration is the only fallible boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Grid size too small to support the merge mechanic.
    InvalidGridSize {
        /// The rejected grid size (must be at least 2).
        grid_size: usize,
    },
    /// Win target must be a positive value.
    InvalidTarget {
        /// The rejected target (must be at least 1).
        target: u32,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidGridSize { grid_size } => {
                write!(f, "invalid grid size {grid_size}: must be at least 2")
            }
            EngineError::InvalidTarget { target } => {
                write!(f, "invalid target {target}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine construction.
pub type EngineResult<T> = Result<T, EngineError>;
