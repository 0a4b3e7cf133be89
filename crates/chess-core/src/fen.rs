//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! [`FenRecord`] is the typed content of the six FEN fields. Parsing is
//! all-or-nothing: either every field is valid or a [`FenError`] names the
//! first bad one.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{CastlingRights, Color, File, Piece, Rank, Square};

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights: '{0}'")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: '{0}'")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: '{0}'")]
    InvalidFullmoveNumber(String),
}

/// Contents of each square, indexed by [`Square::index`].
pub type Placement = [Option<(Piece, Color)>; 64];

/// A fully parsed FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenRecord {
    pub placement: Placement,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenRecord {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::InvalidFieldCount(fields.len()));
        };

        let placement = parse_placement(placement)?;

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let castling = CastlingRights::from_fen_field(castling)
            .ok_or_else(|| FenError::InvalidCastlingRights(castling.to_string()))?;

        let en_passant = match en_passant {
            "-" => None,
            square => Some(
                Square::from_algebraic(square)
                    .ok_or_else(|| FenError::InvalidEnPassantSquare(square.to_string()))?,
            ),
        };

        let halfmove_clock = halfmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(halfmove.to_string()))?;
        let fullmove_number = fullmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(fullmove.to_string()))?;

        Ok(FenRecord {
            placement,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }
}

fn parse_placement(field: &str) -> Result<Placement, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            rows.len()
        )));
    }

    let mut placement: Placement = [None; 64];
    // FEN lists rank 8 first.
    for (row, rank) in rows.iter().zip(Rank::ALL.iter().rev()) {
        let mut file = 0u32;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid empty-square count '{c}' in rank {rank}"
                    )));
                }
                file += run;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if let Some(f) = File::from_index(file as u8) {
                    placement[Square::new(f, *rank).index() as usize] = Some(piece);
                }
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{c}' in rank {rank}"
                )));
            }
            if file > 8 {
                break;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {rank} has {file} squares, expected 8"
            )));
        }
    }
    Ok(placement)
}

impl FromStr for FenRecord {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0;
            for file in File::ALL {
                match self.placement[Square::new(file, *rank).index() as usize] {
                    Some((piece, color)) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_fen_char(color))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), Square::to_algebraic);
        write!(
            f,
            " {} {} {} {} {}",
            self.side_to_move.to_fen_char(),
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
