//! Pseudo-legal move generation per piece kind.

use chess_core::{CastleSide, Color, Move, MoveFlag, Piece, Square};

use super::attacks::{is_square_attacked, ray, slider_directions, KING_STEPS, KNIGHT_JUMPS};
use crate::Position;

/// Moves of the piece on `from` that obey its movement and occupancy rules,
/// ignoring whether its own king is left attacked. Empty if `from` is empty.
///
/// The piece's own color decides the direction of play, not the side to move.
/// Kings are never captured: a square holding either king is not a target.
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Move> {
    let Some((piece, color)) = position.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece {
        Piece::Pawn => pawn_moves(position, from, color, &mut moves),
        Piece::Knight => step_moves(position, from, color, &KNIGHT_JUMPS, &mut moves),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            slide_moves(position, from, color, &slider_directions(piece), &mut moves)
        }
        Piece::King => {
            step_moves(position, from, color, &KING_STEPS, &mut moves);
            castling_moves(position, from, color, &mut moves);
        }
    }
    moves
}

/// Empty squares and enemy pieces other than the king can be moved onto.
fn can_land(position: &Position, to: Square, color: Color) -> bool {
    match position.piece_at(to) {
        None => true,
        Some((piece, owner)) => owner != color && piece != Piece::King,
    }
}

fn step_moves(
    position: &Position,
    from: Square,
    color: Color,
    steps: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    moves.extend(
        steps
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .filter(|&to| can_land(position, to, color))
            .map(|to| Move::normal(from, to)),
    );
}

fn slide_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        moves.extend(
            ray(position, from, dir)
                .filter(|&to| can_land(position, to, color))
                .map(|to| Move::normal(from, to)),
        );
    }
}

fn pawn_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();
    let advance = |to: Square| {
        if to.rank() == color.promotion_rank() {
            Move::new(from, to, MoveFlag::PromoteQueen)
        } else {
            Move::normal(from, to)
        }
    };

    if let Some(one) = from.offset(0, dir).filter(|&sq| position.is_empty_at(sq)) {
        moves.push(advance(one));
        if from.rank() == color.pawn_start_rank() {
            if let Some(two) = one.offset(0, dir).filter(|&sq| position.is_empty_at(sq)) {
                moves.push(Move::new(from, two, MoveFlag::DoublePush));
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match position.piece_at(to) {
            Some(_) if can_land(position, to, color) => moves.push(advance(to)),
            None if position.en_passant == Some(to) && passed_pawn_behind(position, to, color) => {
                moves.push(Move::new(from, to, MoveFlag::EnPassant));
            }
            _ => {}
        }
    }
}

/// An en passant capture onto `target` needs the enemy pawn that just
/// double-advanced to be standing one rank past it.
fn passed_pawn_behind(position: &Position, target: Square, color: Color) -> bool {
    target
        .offset(0, -color.pawn_direction())
        .and_then(|sq| position.piece_at(sq))
        == Some((Piece::Pawn, color.opposite()))
}

/// Castling candidates: the right is held, king and rook are on their home
/// squares, the squares between them are empty and the king is not in check.
/// Whether the king crosses an attacked square is left to legal filtering.
fn castling_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for side in CastleSide::BOTH {
        let available = position.castling.has(color, side)
            && from == side.king_from(color)
            && position.piece_at(side.rook_from(color)) == Some((Piece::Rook, color))
            && side
                .between(color)
                .into_iter()
                .all(|sq| position.is_empty_at(sq));
        if available && !is_square_attacked(position, from, color.opposite()) {
            moves.push(Move::castle(color, side));
        }
    }
}
