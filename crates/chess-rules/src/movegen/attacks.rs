//! Attack patterns and attacked-square detection.

use chess_core::{Color, Piece, Square};

use crate::Position;

pub(super) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Ray directions of a sliding piece. Empty for non-sliders.
pub(super) fn slider_directions(piece: Piece) -> Vec<(i8, i8)> {
    match piece {
        Piece::Bishop => DIAGONALS.to_vec(),
        Piece::Rook => ORTHOGONALS.to_vec(),
        Piece::Queen => [DIAGONALS, ORTHOGONALS].concat(),
        _ => Vec::new(),
    }
}

/// Squares from `from` (exclusive) in one direction, stopping at and
/// including the first occupied square.
pub(super) fn ray(
    position: &Position,
    from: Square,
    (file_delta, rank_delta): (i8, i8),
) -> impl Iterator<Item = Square> + '_ {
    let mut current = Some(from);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let next = current?.offset(file_delta, rank_delta)?;
        current = Some(next);
        blocked = !position.is_empty_at(next);
        Some(next)
    })
}

/// Squares attacked by the piece on `sq`, including squares held by its own
/// side (those pieces are defended). Empty if `sq` is empty.
///
/// Pawns attack their two forward diagonals whether or not anything stands
/// there.
pub fn attacks_from(position: &Position, sq: Square) -> Vec<Square> {
    let Some((piece, color)) = position.piece_at(sq) else {
        return Vec::new();
    };
    match piece {
        Piece::Pawn => [-1, 1]
            .into_iter()
            .filter_map(|df| sq.offset(df, color.pawn_direction()))
            .collect(),
        Piece::Knight => KNIGHT_JUMPS
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .collect(),
        Piece::King => KING_STEPS
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .collect(),
        Piece::Bishop | Piece::Rook | Piece::Queen => slider_directions(piece)
            .into_iter()
            .flat_map(|dir| ray(position, sq, dir))
            .collect(),
    }
}

/// Returns true if any piece of `by` attacks `target`.
///
/// Works backwards from the target: a piece of kind P attacks the target
/// exactly when a P placed on the target would attack it back (pawns use the
/// opposite direction).
pub fn is_square_attacked(position: &Position, target: Square, by: Color) -> bool {
    let holds = |sq: Square, piece: Piece| position.piece_at(sq) == Some((piece, by));

    let pawn_attack = [-1, 1]
        .into_iter()
        .filter_map(|df| target.offset(df, -by.pawn_direction()))
        .any(|sq| holds(sq, Piece::Pawn));
    if pawn_attack {
        return true;
    }

    let stepper_attack = |steps: &[(i8, i8)], piece: Piece| {
        steps
            .iter()
            .filter_map(|&(df, dr)| target.offset(df, dr))
            .any(|sq| holds(sq, piece))
    };
    if stepper_attack(&KNIGHT_JUMPS[..], Piece::Knight)
        || stepper_attack(&KING_STEPS[..], Piece::King)
    {
        return true;
    }

    let slider_attack = |dirs: &[(i8, i8)], piece: Piece| {
        dirs.iter()
            .filter_map(|&dir| ray(position, target, dir).last())
            .any(|sq| holds(sq, piece) || holds(sq, Piece::Queen))
    };
    slider_attack(&DIAGONALS[..], Piece::Bishop) || slider_attack(&ORTHOGONALS[..], Piece::Rook)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_attacks() {
        let pos = Position::startpos();
        assert!(is_square_attacked(&pos, sq("e3"), Color::White));
        assert!(is_square_attacked(&pos, sq("f3"), Color::White));
        assert!(!is_square_attacked(&pos, sq("e4"), Color::White));
        assert!(is_square_attacked(&pos, sq("f6"), Color::Black));
        assert!(!is_square_attacked(&pos, sq("e5"), Color::Black));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let pos = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_square_attacked(&pos, sq("d5"), Color::White));
        assert!(is_square_attacked(&pos, sq("f5"), Color::White));
        assert!(!is_square_attacked(&pos, sq("e5"), Color::White));
        assert!(!is_square_attacked(&pos, sq("d3"), Color::White));
        assert_eq!(attacks_from(&pos, sq("e4")), vec![sq("d5"), sq("f5")]);
    }

    #[test]
    fn sliders_are_blocked() {
        let pos = Position::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1").unwrap();
        assert!(is_square_attacked(&pos, sq("c4"), Color::Black));
        assert!(is_square_attacked(&pos, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&pos, sq("h4"), Color::Black));
        assert!(is_square_attacked(&pos, sq("a1"), Color::Black));
    }

    #[test]
    fn king_attacks_adjacent_squares() {
        let pos = Position::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(is_square_attacked(&pos, sq("b2"), Color::White));
        assert!(!is_square_attacked(&pos, sq("c3"), Color::White));
        assert!(is_square_attacked(&pos, sq("g7"), Color::Black));
        assert_eq!(attacks_from(&pos, sq("a1")).len(), 3);
    }

    #[test]
    fn queen_combines_both_rays() {
        let pos = Position::from_fen("7k/8/8/3Q4/8/8/8/K7 w - - 0 1").unwrap();
        assert_eq!(attacks_from(&pos, sq("d5")).len(), 27);
        assert!(is_square_attacked(&pos, sq("h1"), Color::White));
        assert!(is_square_attacked(&pos, sq("d1"), Color::White));
    }

    #[test]
    fn attack_detection_matches_attack_patterns() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let pos = Position::from_fen(fen).unwrap();
            for target in Square::all() {
                for color in Color::BOTH {
                    let by_pattern = pos
                        .pieces(color)
                        .any(|(from, _)| attacks_from(&pos, from).contains(&target));
                    assert_eq!(
                        is_square_attacked(&pos, target, color),
                        by_pattern,
                        "{fen}: {target} by {color}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_square_attacks_nothing() {
        assert!(attacks_from(&Position::startpos(), sq("e4")).is_empty());
    }
}
