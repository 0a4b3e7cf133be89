//! Legal move filtering and game status.

use chess_core::{Color, Move, Piece, Square};

use super::attacks::is_square_attacked;
use super::pieces::pseudo_legal_moves;
use crate::{MoveError, Position};

/// State of the game from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Legal moves exist and the side to move is not in check.
    Ongoing,
    /// Legal moves exist but the side to move is in check.
    Check,
    /// No legal moves and in check: the side to move has lost.
    Checkmate,
    /// No legal moves and not in check: the game is drawn.
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate. No further input should be accepted.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Applies a move to a copy of the position.
pub fn make_move(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    next.apply_move(m);
    next
}

/// Returns true if the king of `color` is attacked.
///
/// # Panics
///
/// Panics if `color` has no king. Positions built by this crate always have
/// one king per side.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    let king = position
        .king_square(color)
        .unwrap_or_else(|| panic!("no {color} king on the board: {position}"));
    is_square_attacked(position, king, color.opposite())
}

/// Whether playing the pseudo-legal move `m` keeps the mover's king safe.
fn keeps_king_safe(position: &Position, m: Move, us: Color) -> bool {
    if let Some(side) = m.castle_side() {
        let them = us.opposite();
        if is_square_attacked(position, m.from(), them) {
            return false;
        }
        // Put the king on the square it crosses and look again.
        let crossed = side.rook_to(us);
        let mut crossing = position.clone();
        crossing.remove_piece(m.from());
        crossing.put_piece(crossed, Piece::King, us);
        if is_square_attacked(&crossing, crossed, them) {
            return false;
        }
    }
    !is_in_check(&make_move(position, m), us)
}

/// Generates all legal moves for the side to move.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    position
        .pieces(us)
        .flat_map(|(from, _)| pseudo_legal_moves(position, from))
        .filter(|&m| keeps_king_safe(position, m, us))
        .collect()
}

/// Legal moves of the piece on `from`. Empty unless it belongs to the side to
/// move.
pub fn legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    let us = position.side_to_move;
    match position.piece_at(from) {
        Some((_, color)) if color == us => pseudo_legal_moves(position, from)
            .into_iter()
            .filter(|&m| keeps_king_safe(position, m, us))
            .collect(),
        _ => Vec::new(),
    }
}

/// Returns true if the side to move has at least one legal move.
pub fn has_legal_move(position: &Position) -> bool {
    let us = position.side_to_move;
    position.pieces(us).any(|(from, _)| {
        pseudo_legal_moves(position, from)
            .into_iter()
            .any(|m| keeps_king_safe(position, m, us))
    })
}

/// Classifies the position for the side to move.
pub fn game_status(position: &Position) -> GameStatus {
    let in_check = is_in_check(position, position.side_to_move);
    match (has_legal_move(position), in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Ongoing,
    }
}

/// Returns true if the side to move can deliver checkmate with one move.
pub fn is_mate_in_one(position: &Position) -> bool {
    let them = position.side_to_move.opposite();
    legal_moves(position).into_iter().any(|m| {
        let next = make_move(position, m);
        is_in_check(&next, them) && !has_legal_move(&next)
    })
}

/// Resolves an origin/destination pair to the legal move with its flags, as
/// needed when a user picks two squares.
pub fn find_legal_move(position: &Position, from: Square, to: Square) -> Option<Move> {
    legal_moves_from(position, from)
        .into_iter()
        .find(|m| m.to() == to)
}

/// Applies `m` after checking it against the current legal moves. On error the
/// position is left unchanged.
pub fn try_apply_move(position: &mut Position, m: Move) -> Result<(), MoveError> {
    if !legal_moves_from(position, m.from()).contains(&m) {
        tracing::debug!(%m, fen = %position, "rejected illegal move");
        return Err(MoveError::Illegal(m));
    }
    position.apply_move(m);
    Ok(())
}
