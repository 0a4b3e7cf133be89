//! Chess rules engine over a simple 64-cell board.
//!
//! This crate provides:
//! - [`Position`] - board contents, side to move, castling rights, en passant
//!   target and move counters, with FEN conversion
//! - [`movegen`] - per-piece move and attack rules, legal move filtering,
//!   check, checkmate and stalemate detection
//! - [`RandomSetup`] - randomized starting positions with each side confined
//!   to its own half of the board
//!
//! # Example
//!
//! ```
//! use chess_rules::movegen::{find_legal_move, game_status, legal_moves, GameStatus};
//! use chess_rules::{Position, Square};
//!
//! let mut position = Position::startpos();
//! assert_eq!(legal_moves(&position).len(), 20);
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let double_push = find_legal_move(&position, e2, e4).unwrap();
//! position.apply_move(double_push);
//! assert_eq!(game_status(&position), GameStatus::Ongoing);
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod error;
mod fen;
pub mod movegen;
mod position;
mod setup;

pub use chess_core::{CastleSide, CastlingRights, Color, FenError, Move, MoveFlag, Piece, Square};
pub use error::MoveError;
pub use position::Position;
pub use setup::{generate, RandomSetup, SetupConfig, SetupError};
