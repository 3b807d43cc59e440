//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players of a chess game. White moves first.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for castling rights,
//! king squares and similar per-side bookkeeping.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Index for array storage (White = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Rank direction pawns of this side advance in.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// 0-based rank this side's pieces start on.
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_chessboard::core::{Side, SideMap};
///
/// let mut kings = SideMap::new(|side| side == Side::White);
/// assert!(kings[Side::White]);
/// kings[Side::Black] = true;
/// assert!(kings[Side::Black]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Black)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
        assert_eq!(Side::White.forward(), 1);
        assert_eq!(Side::Black.back_rank(), 7);
        assert_eq!(format!("{}", Side::Black), "Black");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32 * 10);

        assert_eq!(map[Side::White], 0);
        assert_eq!(map[Side::Black], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Side::White] = 10;
        map[Side::Black] = 20;

        assert_eq!(map[Side::White], 10);
        assert_eq!(map[Side::Black], 20);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::White, &0), (Side::Black, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
