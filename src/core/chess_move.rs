//! Move representation: origin + destination + optional promotion.
//!
//! Moves are plain values. Two moves are equal iff origin, destination and
//! promotion tag all match, so `e7e8q` and `e7e8` are distinct moves.
//!
//! The rules engine decides which moves are legal; a `Move` by itself says
//! nothing about legality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::piece::PieceKind;
use super::square::Square;

/// A chess move.
///
/// ## Example
///
/// ```
/// use rust_chessboard::core::{Move, PieceKind, Square};
///
/// let e7: Square = "e7".parse().unwrap();
/// let e8: Square = "e8".parse().unwrap();
///
/// let push = Move::new(e7, e8);
/// let promote = Move::promoting(e7, e8, PieceKind::Queen);
///
/// assert_ne!(push, promote);
/// assert_eq!(promote.to_string(), "e7e8q");
/// assert_eq!("e7e8q".parse::<Move>().unwrap(), promote);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece leaves.
    pub from: Square,

    /// Square the piece lands on.
    pub to: Square,

    /// Piece kind a pawn becomes, if this is a promotion.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting move.
    #[must_use]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Check if this move carries a promotion tag.
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// Error returned for text that is not a UCI move (`e2e4`, `e7e8q`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid move text: {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError(s.to_string());
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(err());
        }
        let from: Square = s[0..2].parse().map_err(|_| err())?;
        let to: Square = s[2..4].parse().map_err(|_| err())?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(err()),
            },
        };
        Ok(Self { from, to, promotion })
    }
}
