//! Chess position representation.

use chess_core::{CastlingRights, Color, FenRecord, Move, MoveFlag, Piece, Square};

/// Complete chess position state.
///
/// A plain value: cloning is cheap and the engine never keeps references to
/// a position between calls. Callers that want undo keep their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Square contents, indexed by [`Square::index`].
    pub(crate) board: [Option<(Piece, Color)>; 64],

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square, set only right after a double pawn push.
    pub en_passant: Option<Square>,

    /// Halfmove clock as read from FEN. Not advanced by [`Position::apply_move`].
    pub halfmove_clock: u32,

    /// Fullmove number as read from FEN. Not advanced by [`Position::apply_move`].
    pub fullmove_number: u32,
}

impl Position {
    /// Creates an empty board with White to move and no rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenRecord::STARTPOS).expect("STARTPOS is valid")
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.board[sq.index() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, replacing whatever stood on the square.
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece, color: Color) {
        self.board[sq.index() as usize] = Some((piece, color));
    }

    /// Empties a square and returns what stood there.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Piece, Color)> {
        self.board[sq.index() as usize].take()
    }

    /// Iterates over the squares and kinds of all pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((piece, c)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of pieces of a given kind and color.
    pub fn count(&self, piece: Piece, color: Color) -> usize {
        self.pieces(color).filter(|&(_, p)| p == piece).count()
    }

    /// The square of the king of `color`, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Applies a move in place.
    ///
    /// No legality check is performed: `m` must come from
    /// [`legal_moves`](crate::movegen::legal_moves) for this position, or use
    /// [`try_apply_move`](crate::movegen::try_apply_move) instead.
    ///
    /// Handles captures (including the pawn removed by en passant), the rook
    /// jump on castling, automatic queen promotion, castling rights and the
    /// en passant target, then passes the move to the other side. The move
    /// counters are left as they are.
    ///
    /// # Panics
    ///
    /// Panics if the origin square is empty.
    pub fn apply_move(&mut self, m: Move) {
        let (from, to) = (m.from(), m.to());
        let (piece, color) = self
            .remove_piece(from)
            .unwrap_or_else(|| panic!("apply_move {m}: no piece on {from}"));

        self.remove_piece(to);
        if m.is_en_passant() {
            // The captured pawn sits beside the origin, behind the target.
            if let Some(victim) = to.offset(0, -color.pawn_direction()) {
                self.remove_piece(victim);
            }
        }

        let landed = if piece == Piece::Pawn && to.rank() == color.promotion_rank() {
            Piece::Queen
        } else {
            piece
        };
        self.put_piece(to, landed, color);

        if let Some(side) = m.castle_side() {
            if let Some((rook, rook_color)) = self.remove_piece(side.rook_from(color)) {
                self.put_piece(side.rook_to(color), rook, rook_color);
            }
        }

        if piece == Piece::King {
            self.castling.remove_color(color);
        }
        self.castling.remove_for_corner(from);
        self.castling.remove_for_corner(to);

        self.en_passant = match m.flag() {
            MoveFlag::DoublePush => from.offset(0, color.pawn_direction()),
            _ => None,
        };

        self.side_to_move = self.side_to_move.opposite();
    }
}
