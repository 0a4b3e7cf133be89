//! Property tests: random walks through legal play, checked at every step.

use chess_rules::movegen::{
    attacks_from, is_in_check, is_square_attacked, legal_moves, make_move, pseudo_legal_moves,
};
use chess_rules::{Color, Position, RandomSetup, SetupConfig, Square};
use proptest::prelude::*;
use proptest::sample::Index;

const STARTS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/pppq1ppp/2n2n2/3pp3/3PP3/2N2N2/PPPQ1PPP/R3K2R w KQkq - 0 1",
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
    "4k3/1P6/8/3pP3/8/8/6p1/4K3 w - d6 0 1",
];

fn start_position(choice: usize, seed: u64) -> Position {
    match STARTS.get(choice) {
        Some(fen) => Position::from_fen(fen).expect("start FENs are valid"),
        None => RandomSetup::new(SetupConfig {
            disallow_white_mate_in_one: false,
            seed: Some(seed),
            ..SetupConfig::default()
        })
        .generate()
        .expect("default budget is ample"),
    }
}

fn check_fen_round_trip(position: &Position) -> Result<(), TestCaseError> {
    let fen = position.to_fen();
    let reparsed = Position::from_fen(&fen);
    prop_assert_eq!(reparsed.as_ref(), Ok(position), "{}", fen);
    Ok(())
}

/// A pseudo-legal move is legal exactly when it leaves the mover's king
/// safe, and for castling also when the king neither starts on, crosses nor
/// lands on an attacked square.
fn check_legality(position: &Position) -> Result<(), TestCaseError> {
    let mover = position.side_to_move;
    let enemy = mover.opposite();
    let legal = legal_moves(position);

    for (from, _) in position.pieces(mover) {
        for m in pseudo_legal_moves(position, from) {
            let expected = match m.castle_side() {
                Some(side) => {
                    !is_in_check(position, mover)
                        && !is_square_attacked(position, side.rook_to(mover), enemy)
                        && !is_square_attacked(position, side.king_to(mover), enemy)
                }
                None => !is_in_check(&make_move(position, m), mover),
            };
            prop_assert_eq!(legal.contains(&m), expected, "{} in {}", m, position);
        }
    }
    for m in &legal {
        prop_assert!(!is_in_check(&make_move(position, *m), mover), "{} in {}", m, position);
    }
    Ok(())
}

fn check_attack_consistency(position: &Position) -> Result<(), TestCaseError> {
    for color in [Color::White, Color::Black] {
        let attacked: Vec<Square> = position
            .pieces(color)
            .flat_map(|(sq, _)| attacks_from(position, sq))
            .collect();
        for target in Square::all() {
            prop_assert_eq!(
                is_square_attacked(position, target, color),
                attacked.contains(&target),
                "{} attacks on {} in {}",
                color,
                target,
                position
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_walks_keep_rules_consistent(
        choice in 0..=STARTS.len(),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 0..40),
    ) {
        let mut position = start_position(choice, seed);
        for pick in picks {
            check_fen_round_trip(&position)?;
            check_legality(&position)?;
            check_attack_consistency(&position)?;

            let moves = legal_moves(&position);
            if moves.is_empty() {
                break;
            }
            let mover = position.side_to_move;
            position.apply_move(*pick.get(&moves));
            prop_assert!(!is_in_check(&position, mover), "{}", position);
            prop_assert_eq!(position.side_to_move, mover.opposite());
        }
    }

    #[test]
    fn both_kings_survive_legal_play(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 1..60),
    ) {
        let mut position = start_position(STARTS.len(), seed);
        for pick in picks {
            let moves = legal_moves(&position);
            if moves.is_empty() {
                break;
            }
            position.apply_move(*pick.get(&moves));
            prop_assert!(position.king_square(Color::White).is_some());
            prop_assert!(position.king_square(Color::Black).is_some());
        }
    }
}
