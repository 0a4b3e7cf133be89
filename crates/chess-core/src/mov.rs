//! Move representation.

use std::fmt;

use crate::{CastleSide, Color, Piece, Square};

/// What a move does beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Plain move or capture.
    Normal,
    /// Pawn advance of two squares; sets the en passant target.
    DoublePush,
    /// King steps two files towards the h-rook, which jumps over it.
    CastleKingside,
    /// King steps two files towards the a-rook, which jumps over it.
    CastleQueenside,
    /// Pawn capture onto the en passant target.
    EnPassant,
    /// Pawn reaches the last rank and becomes a queen.
    PromoteQueen,
}

/// A chess move: origin, destination and its special-move flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    flag: MoveFlag,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move { from, to, flag }
    }

    /// Creates a move without special flags.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Normal)
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }

    /// The castling move of `color` towards `side`.
    #[inline]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        let flag = match side {
            CastleSide::Kingside => MoveFlag::CastleKingside,
            CastleSide::Queenside => MoveFlag::CastleQueenside,
        };
        Self::new(side.king_from(color), side.king_to(color), flag)
    }

    /// The wing this move castles towards, if it is a castling move.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.flag {
            MoveFlag::CastleKingside => Some(CastleSide::Kingside),
            MoveFlag::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castle_side().is_some()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// The piece a promoting pawn turns into. Always a queen.
    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag {
            MoveFlag::PromoteQueen => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Long algebraic form, e.g. `e2e4` or `a7a8q`.
    pub fn to_uci(self) -> String {
        match self.promotion() {
            Some(_) => format!("{}{}q", self.from, self.to),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self.to_uci(), self.flag)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}
