//! Random starting positions.
//!
//! Each side's sixteen pieces are scattered over the four ranks nearest its
//! own edge. Candidates are drawn whole and thrown away until one passes every
//! check; nothing is repaired incrementally.

use std::fmt;
use std::iter;

use chess_core::{CastlingRights, Color, File, Piece, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use crate::movegen::{has_legal_move, is_in_check, is_mate_in_one};
use crate::Position;

/// The pieces each side starts with.
const ARMY: [(Piece, usize); 6] = [
    (Piece::King, 1),
    (Piece::Queen, 1),
    (Piece::Rook, 2),
    (Piece::Bishop, 2),
    (Piece::Knight, 2),
    (Piece::Pawn, 8),
];

/// Errors that can occur when configuring or running the generator.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The configuration is not valid TOML or has mistyped fields.
    #[error("failed to parse setup config: {0}")]
    Config(#[from] toml::de::Error),
    /// Every candidate was rejected. Not expected with the default budget.
    #[error("no acceptable random position found in {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

/// Generator settings.
///
/// ```
/// use chess_rules::SetupConfig;
///
/// let config = SetupConfig::from_toml_str("seed = 7\nmax_attempts = 500").unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert!(config.disallow_white_mate_in_one);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Reject positions where White can mate on the first move.
    pub disallow_white_mate_in_one: bool,
    /// Candidates to try before giving up.
    pub max_attempts: u32,
    /// Fixed seed for reproducible output. Seeded from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            disallow_white_mate_in_one: true,
            max_attempts: 10_000,
            seed: None,
        }
    }
}

impl SetupConfig {
    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(s)?)
    }
}

/// Why a candidate was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    InCheck(Color),
    NoMoves(Color),
    WhiteMateInOne,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InCheck(color) => write!(f, "{color} starts in check"),
            Rejection::NoMoves(color) => write!(f, "{color} has no legal move"),
            Rejection::WhiteMateInOne => write!(f, "White has a mate in one"),
        }
    }
}

/// Random starting position generator.
#[derive(Debug)]
pub struct RandomSetup<R = StdRng> {
    config: SetupConfig,
    rng: R,
}

impl RandomSetup<StdRng> {
    /// Creates a generator, seeded from `config.seed` when given.
    pub fn new(config: SetupConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RandomSetup<R> {
    /// Creates a generator drawing from the given random source. The
    /// configured seed is ignored.
    pub fn with_rng(config: SetupConfig, rng: R) -> Self {
        RandomSetup { config, rng }
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    /// Draws candidates until one is accepted.
    ///
    /// An accepted position has White to move, no castling rights, no en
    /// passant target and counters `0 1`. Neither king is in check, both
    /// sides have a legal move, and if configured White has no mate in one.
    pub fn generate(&mut self) -> Result<Position, SetupError> {
        for attempt in 1..=self.config.max_attempts {
            let candidate = self.candidate();
            match self.check(&candidate) {
                Ok(()) => {
                    tracing::debug!(attempt, fen = %candidate, "accepted random position");
                    return Ok(candidate);
                }
                Err(reason) => tracing::trace!(attempt, %reason, "rejected random position"),
            }
        }
        tracing::warn!(
            attempts = self.config.max_attempts,
            "random setup ran out of attempts"
        );
        Err(SetupError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }

    fn candidate(&mut self) -> Position {
        let mut position = Position::empty();
        for color in Color::BOTH {
            let mut squares: Vec<Square> = color
                .home_ranks()
                .into_iter()
                .flat_map(|rank| File::ALL.map(|file| Square::new(file, rank)))
                .collect();
            squares.shuffle(&mut self.rng);

            let army = ARMY
                .into_iter()
                .flat_map(|(piece, count)| iter::repeat(piece).take(count));
            for (sq, piece) in squares.into_iter().zip(army) {
                position.put_piece(sq, piece, color);
            }
        }
        position.side_to_move = Color::White;
        position.castling = CastlingRights::NONE;
        position.en_passant = None;
        position
    }

    fn check(&self, position: &Position) -> Result<(), Rejection> {
        for color in Color::BOTH {
            if is_in_check(position, color) {
                return Err(Rejection::InCheck(color));
            }
        }

        let mut probe = position.clone();
        for color in Color::BOTH {
            probe.side_to_move = color;
            if !has_legal_move(&probe) {
                return Err(Rejection::NoMoves(color));
            }
        }

        if self.config.disallow_white_mate_in_one && is_mate_in_one(position) {
            return Err(Rejection::WhiteMateInOne);
        }
        Ok(())
    }
}

/// Generates a random starting position with default limits.
pub fn generate(disallow_white_mate_in_one: bool) -> Result<Position, SetupError> {
    RandomSetup::new(SetupConfig {
        disallow_white_mate_in_one,
        ..SetupConfig::default()
    })
    .generate()
}
