//! Pixel geometry: translating surface coordinates to squares and back.
//!
//! Row 0 is the top of the surface. With the default orientation rank 8 is
//! drawn on row 0; a flipped board puts rank 1 there and mirrors files.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Square, DEFAULT_SQUARE_SIZE};

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Maps between surface pixels and board squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Edge length of one square in pixels.
    pub square_size: u32,

    /// Rank 1 drawn at the top.
    pub flipped: bool,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            flipped: false,
        }
    }
}

impl BoardGeometry {
    /// Geometry described by a board configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            square_size: config.square_size,
            flipped: config.flipped,
        }
    }

    /// Edge length of the whole board in pixels.
    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.square_size.saturating_mul(8)
    }

    /// Square under a pixel, or `None` outside the board.
    ///
    /// ```
    /// use rust_chessboard::ui::BoardGeometry;
    ///
    /// let geometry = BoardGeometry::default();
    /// assert_eq!(geometry.square_at(0, 0), Some("a8".parse().unwrap()));
    /// assert_eq!(geometry.square_at(639, 639), Some("h1".parse().unwrap()));
    /// assert_eq!(geometry.square_at(640, 0), None);
    /// assert_eq!(geometry.square_at(-1, 0), None);
    /// ```
    #[must_use]
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if x < 0 || y < 0 || self.square_size == 0 {
            return None;
        }
        let size = i64::from(self.square_size);
        let col = i64::from(x) / size;
        let row = i64::from(y) / size;
        if col >= 8 || row >= 8 {
            return None;
        }
        self.square_at_cell(col as u8, row as u8)
    }

    /// Square drawn at a (column, row) cell; row 0 is the top.
    #[must_use]
    pub fn square_at_cell(&self, col: u8, row: u8) -> Option<Square> {
        if col >= 8 || row >= 8 {
            return None;
        }
        if self.flipped {
            Square::from_file_rank(7 - col, row)
        } else {
            Square::from_file_rank(col, 7 - row)
        }
    }

    /// (column, row) cell a square is drawn in.
    #[must_use]
    pub fn cell_of(&self, square: Square) -> (u8, u8) {
        if self.flipped {
            (7 - square.file(), square.rank())
        } else {
            (square.file(), 7 - square.rank())
        }
    }

    /// Pixel rectangle a square covers.
    ///
    /// Coordinates saturate at `i32::MAX` for squares too large to address.
    #[must_use]
    pub fn square_rect(&self, square: Square) -> Rect {
        let (col, row) = self.cell_of(square);
        let size = i64::from(self.square_size);
        Rect {
            x: clamp_i32(i64::from(col) * size),
            y: clamp_i32(i64::from(row) * size),
            width: self.square_size,
            height: self.square_size,
        }
    }

    /// Pixel centre of a square, where glyphs and markers are drawn.
    #[must_use]
    pub fn square_center(&self, square: Square) -> (i32, i32) {
        let rect = self.square_rect(square);
        let half = i64::from(self.square_size / 2);
        (
            clamp_i32(i64::from(rect.x) + half),
            clamp_i32(i64::from(rect.y) + half),
        )
    }

    /// Radius of the destination marker dot.
    #[must_use]
    pub fn marker_radius(&self) -> u32 {
        self.square_size / 6
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
