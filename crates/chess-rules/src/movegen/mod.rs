//! Move generation.
//!
//! Three layers, each built only on the ones before it:
//! - attack patterns: which squares a piece attacks, and whether a square is
//!   attacked by a color ([`is_square_attacked`]). This never looks at
//!   castling, since castling availability is decided from attack results.
//! - pseudo-legal moves per piece ([`pseudo_legal_moves`]), obeying movement
//!   and occupancy rules but ignoring king safety.
//! - legal moves ([`legal_moves`]): pseudo-legal moves simulated on a copy of
//!   the position and kept only when the mover's king is safe afterwards, plus
//!   the check, checkmate and stalemate queries built on them.

mod attacks;
mod legal;
mod pieces;

pub use attacks::{attacks_from, is_square_attacked};
pub use legal::{
    find_legal_move, game_status, has_legal_move, is_in_check, is_mate_in_one, legal_moves,
    legal_moves_from, make_move, try_apply_move, GameStatus,
};
pub use pieces::pseudo_legal_moves;
