//! Rules engine trait for game implementations.
//!
//! Implementations define:
//! - Which moves are legal in the current position
//! - How a move changes the position
//! - When the game is over and with what result
//!
//! The interaction controller calls into `RulesEngine` but never interprets
//! chess rules directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Move, Piece, Side, Square};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(Side::White) => write!(f, "1-0"),
            GameResult::Winner(Side::Black) => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// Returned by `apply_move` when the move is not legal in the current position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("illegal move {mv} in current position")]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mv: Move,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec if the side to move can't act
/// - `apply_move`: Must reject anything outside `legal_moves()` and leave
///   the position untouched when it does
/// - `apply_move`: Must be deterministic
/// - `result`: Return None while the game continues
pub trait RulesEngine {
    /// Piece standing on a square, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Side whose turn it is.
    fn side_to_move(&self) -> Side;

    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Move>;

    /// Apply a legal move to the position.
    fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMoveError>;

    /// Game result.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Legal moves whose origin is `origin`, in `legal_moves()` order.
    fn legal_moves_from(&self, origin: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == origin)
            .collect()
    }

    /// Check if the game is over.
    fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Check if `square` holds a piece of the side to move.
    fn is_friendly(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.side == self.side_to_move())
    }
}
