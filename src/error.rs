//! Error types for the forward Game of Life simulator

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors detected while constructing or running a simulation
///
/// All input errors are raised before any stepping work begins;
/// `AllocationFailure` is the one error that can only surface at
/// buffer-construction time.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The seed string does not cover the grid area
    #[error("seed must be exactly {expected} characters long for a {side}x{side} grid, got {actual}")]
    SeedLengthMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },

    /// The seed contains a character other than '0' or '1'
    #[error("invalid seed character '{character}' at position {position}")]
    InvalidSeedCharacter { character: char, position: usize },

    /// A caller-supplied value is outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A cell buffer could not be allocated
    #[error("failed to allocate a buffer for {cells} cells")]
    AllocationFailure {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}
