//! Errors raised by move application.

use chess_core::Move;
use thiserror::Error;

/// Error type for checked move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move is not among the legal moves of the position it was applied to.
    #[error("illegal move: {0}")]
    Illegal(Move),
}
