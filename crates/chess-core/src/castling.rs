//! Castling rights and castling geometry.

use std::fmt;

use crate::{Color, File, Square};

/// The wing a king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// The king's home square. Castling is only generated from here.
    #[inline]
    pub const fn king_from(self, color: Color) -> Square {
        Square::new(File::E, color.back_rank())
    }

    /// Where the king lands.
    #[inline]
    pub const fn king_to(self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => File::G,
            CastleSide::Queenside => File::C,
        };
        Square::new(file, color.back_rank())
    }

    /// The corner square the rook starts on.
    #[inline]
    pub const fn rook_from(self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => File::H,
            CastleSide::Queenside => File::A,
        };
        Square::new(file, color.back_rank())
    }

    /// Where the rook lands, the square the king crosses.
    #[inline]
    pub const fn rook_to(self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => File::F,
            CastleSide::Queenside => File::D,
        };
        Square::new(file, color.back_rank())
    }

    /// Squares between king and rook that must be empty.
    pub fn between(self, color: Color) -> Vec<Square> {
        let files: &[File] = match self {
            CastleSide::Kingside => &[File::F, File::G],
            CastleSide::Queenside => &[File::B, File::C, File::D],
        };
        files
            .iter()
            .map(|&file| Square::new(file, color.back_rank()))
            .collect()
    }

    /// The castle side implied by a king moving from `from` to `to`, if the
    /// move is a two-file king step along its home rank.
    pub fn from_king_step(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        CastleSide::BOTH
            .into_iter()
            .find(|side| side.king_from(color) == from && side.king_to(color) == to)
    }

    const fn flag(self, color: Color) -> u8 {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => CastlingRights::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => CastlingRights::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => CastlingRights::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => CastlingRights::BLACK_QUEENSIDE,
        }
    }
}

/// The set of castling moves still available, one bit per color and wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    const WHITE_KINGSIDE: u8 = 0b0001;
    const WHITE_QUEENSIDE: u8 = 0b0010;
    const BLACK_KINGSIDE: u8 = 0b0100;
    const BLACK_QUEENSIDE: u8 = 0b1000;

    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// FEN order of the rights: `KQkq`.
    const CANONICAL: [(Color, CastleSide, char); 4] = [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ];

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & side.flag(color) != 0
    }

    #[inline]
    pub fn insert(&mut self, color: Color, side: CastleSide) {
        self.0 |= side.flag(color);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !side.flag(color);
    }

    /// Drops both wings for `color`, as after a king move.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// Drops whichever right depends on a rook standing on `square`.
    pub fn remove_for_corner(&mut self, square: Square) {
        for (color, side, _) in Self::CANONICAL {
            if side.rook_from(color) == square {
                self.remove(color, side);
            }
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parses a FEN castling field. Returns `None` on any character outside
    /// `KQkq`, or when `-` is mixed with rights.
    pub fn from_fen_field(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(Self::NONE);
        }
        let mut rights = Self::NONE;
        for c in field.chars() {
            let (color, side, _) = Self::CANONICAL.into_iter().find(|&(_, _, ch)| ch == c)?;
            rights.insert(color, side);
        }
        Some(rights)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (color, side, c) in Self::CANONICAL {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
