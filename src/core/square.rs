//! Board coordinates.
//!
//! ## Layout
//!
//! A `Square` wraps a `u8` index in `0..64`:
//! - a1 = 0, h1 = 7
//! - a8 = 56, h8 = 63
//!
//! Files and ranks are 0-based (`file 0` = a, `rank 0` = 1).
//!
//! ## Usage
//!
//! ```
//! use rust_chessboard::core::Square;
//!
//! let e4: Square = "e4".parse().unwrap();
//! assert_eq!(e4.file(), 4);
//! assert_eq!(e4.rank(), 3);
//! assert_eq!(Square::from_file_rank(4, 3), Some(e4));
//! assert_eq!(e4.to_string(), "e4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the 64 board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Create a square from a `0..64` index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a square from 0-based file and rank.
    #[must_use]
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Get the raw index (`0..64`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based file (a = 0).
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// 0-based rank (rank 1 = 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Step by a (file, rank) delta, `None` when leaving the board.
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// True for dark squares (a1 is dark).
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// Iterate all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

/// Error returned when a square name is not of the form `[a-h][1-8]`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid square name: {0:?}")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::from_file_rank(file, rank).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert!(Square::from_index(0).is_some());
        assert!(Square::from_index(63).is_some());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn test_file_rank() {
        let h8 = Square::from_index(63).unwrap();
        assert_eq!(h8.file(), 7);
        assert_eq!(h8.rank(), 7);
        assert_eq!(Square::from_file_rank(8, 0), None);
        assert_eq!(Square::from_file_rank(0, 7).unwrap().index(), 56);
    }

    #[test]
    fn test_offset() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Some("b3".parse().unwrap()));
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn test_parse_and_display() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(name.parse::<Square>(), Ok(sq));
        }
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_colour() {
        assert!("a1".parse::<Square>().unwrap().is_dark());
        assert!(!"h1".parse::<Square>().unwrap().is_dark());
        assert!(!"a8".parse::<Square>().unwrap().is_dark());
    }
}
