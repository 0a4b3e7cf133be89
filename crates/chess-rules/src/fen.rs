//! FEN conversion for [`Position`].

use std::fmt;
use std::str::FromStr;

use chess_core::{Color, FenError, FenRecord, Piece};

use crate::Position;

impl Position {
    /// Creates a position from a FEN string.
    ///
    /// On top of the field checks done by [`FenRecord::parse`], the board must
    /// hold exactly one king per side.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let record = FenRecord::parse(fen)?;

        for color in Color::BOTH {
            let kings = record
                .placement
                .iter()
                .filter(|&&cell| cell == Some((Piece::King, color)))
                .count();
            if kings != 1 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "expected exactly one {color} king, found {kings}"
                )));
            }
        }

        Ok(Position {
            board: record.placement,
            side_to_move: record.side_to_move,
            castling: record.castling,
            en_passant: record.en_passant,
            halfmove_clock: record.halfmove_clock,
            fullmove_number: record.fullmove_number,
        })
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        FenRecord {
            placement: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_string()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

/// Formats the position as FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
