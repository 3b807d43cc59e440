//! Standard chess rules.
//!
//! A complete FIDE rules engine used by the interaction controller:
//! - Full move generation: castling, en passant, promotion
//! - Legality by king safety
//! - Automatic game end: checkmate, stalemate, insufficient material,
//!   seventy-five-move rule, fivefold repetition
//!
//! Positions are set up from FEN; `StandardChess::new()` is the usual start.

mod board;
mod game;
mod movegen;

pub use board::{castling, Board, FenError, START_FEN};
pub use game::{StandardChess, Termination, FIVEFOLD, SEVENTY_FIVE_MOVE_PLIES};
pub use movegen::{in_check, is_attacked, legal_moves, perft};
