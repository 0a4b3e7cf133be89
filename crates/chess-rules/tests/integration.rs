//! Integration tests for chess-rules: whole games played through the public
//! API and bulk checks over generated starting positions.

use chess_rules::movegen::{
    find_legal_move, game_status, has_legal_move, is_in_check, is_mate_in_one, legal_moves,
    try_apply_move, GameStatus,
};
use chess_rules::{generate, Color, MoveError, Position, RandomSetup, SetupConfig, SetupError, Square};

/// Plays a move given as `from` and `to` squares, e.g. "e2e4".
fn play(position: &mut Position, uci: &str) {
    let from = Square::from_algebraic(&uci[0..2]).expect("valid from square");
    let to = Square::from_algebraic(&uci[2..4]).expect("valid to square");
    let m = find_legal_move(position, from, to)
        .unwrap_or_else(|| panic!("{uci} should be legal in {position}"));
    try_apply_move(position, m).expect("move was taken from the legal list");
}

fn seeded_setup(seed: u64, disallow_white_mate_in_one: bool) -> Position {
    RandomSetup::new(SetupConfig {
        disallow_white_mate_in_one,
        seed: Some(seed),
        ..SetupConfig::default()
    })
    .generate()
    .unwrap_or_else(|e| panic!("seed {seed}: {e}"))
}

#[test]
fn test_fools_mate() {
    let mut position = Position::startpos();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut position, uci);
    }

    assert_eq!(game_status(&position), GameStatus::Checkmate);
    assert!(game_status(&position).is_over());
    assert!(legal_moves(&position).is_empty());
    assert_eq!(
        position.to_fen(),
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn test_en_passant_game() {
    let mut position = Position::startpos();
    for uci in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        play(&mut position, uci);
    }
    assert_eq!(position.en_passant, Square::from_algebraic("d6"));

    play(&mut position, "e5d6");
    assert_eq!(
        position.to_fen(),
        "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
}

#[test]
fn test_castling_game() {
    let mut position = Position::startpos();
    for uci in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"] {
        play(&mut position, uci);
    }
    assert_eq!(
        position.to_fen(),
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 0 1"
    );
}

#[test]
fn test_illegal_move_leaves_position_untouched() {
    let mut position = Position::startpos();
    let before = position.clone();
    let e2 = Square::from_algebraic("e2").unwrap();
    let e5 = Square::from_algebraic("e5").unwrap();
    let bogus = chess_rules::Move::normal(e2, e5);

    assert_eq!(try_apply_move(&mut position, bogus), Err(MoveError::Illegal(bogus)));
    assert_eq!(position, before);
}

#[test]
fn test_random_setups_hold_invariants() {
    for seed in 0..1000 {
        let position = seeded_setup(seed, false);
        let fen = position.to_fen();

        assert!(fen.ends_with(" w - - 0 1"), "seed {seed}: {fen}");
        assert_eq!(Position::from_fen(&fen).as_ref(), Ok(&position), "seed {seed}");

        for color in [Color::White, Color::Black] {
            assert_eq!(position.pieces(color).count(), 16, "seed {seed}: {fen}");
            let home = color.home_ranks();
            assert!(
                position.pieces(color).all(|(sq, _)| home.contains(&sq.rank())),
                "seed {seed}: {color} piece outside its half in {fen}"
            );
            assert!(!is_in_check(&position, color), "seed {seed}: {color} in check in {fen}");

            let mut probe = position.clone();
            probe.side_to_move = color;
            assert!(has_legal_move(&probe), "seed {seed}: {color} cannot move in {fen}");
        }
    }
}

#[test]
fn test_random_setups_exclude_mate_in_one() {
    for seed in 0..200 {
        let position = seeded_setup(seed, true);
        assert!(!is_mate_in_one(&position), "seed {seed}: {position}");
    }
}

#[test]
fn test_random_setups_vary() {
    let first = seeded_setup(1, true);
    let differs = (2..20).any(|seed| seeded_setup(seed, true) != first);
    assert!(differs, "different seeds should give different positions");
}

#[test]
fn test_generate_convenience() {
    let position = generate(true).expect("default budget is ample");
    assert_eq!(position.side_to_move, Color::White);
    assert!(!is_mate_in_one(&position));
}

#[test]
fn test_setup_from_toml() {
    let config = SetupConfig::from_toml_str("seed = 2024\nmax_attempts = 1").unwrap();
    match RandomSetup::new(config).generate() {
        Ok(position) => assert_eq!(position.pieces(Color::Black).count(), 16),
        Err(SetupError::AttemptsExhausted { attempts }) => assert_eq!(attempts, 1),
        Err(e) => panic!("unexpected error: {e}"),
    }
}
