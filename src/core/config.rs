//! Board presentation configuration.
//!
//! Front ends configure the board once at startup:
//! - `square_size`: edge length of one square in surface pixels
//! - `flipped`: draw Black at the bottom instead of White
//! - `palette`: fixed square and marker colours
//!
//! Nothing here affects move legality or the selection state machine.

use serde::{Deserialize, Serialize};

/// Default square edge length in pixels.
pub const DEFAULT_SQUARE_SIZE: u32 = 80;

/// Largest square edge length accepted by `BoardConfig::with_square_size`.
///
/// Keeps every pixel coordinate of the board inside `i32`.
pub const MAX_SQUARE_SIZE: u32 = 4096;

/// Colours used when drawing the board.
///
/// Values are CSS-style colour strings handed straight to the drawing
/// surface. The set is fixed; there is no theme selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Light squares.
    pub light: String,

    /// Dark squares.
    pub dark: String,

    /// The selected origin square.
    pub selected: String,

    /// Dots drawn on candidate destinations.
    pub marker: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: "#F0D9B5".to_string(),
            dark: "#B58863".to_string(),
            selected: "#F6F669".to_string(),
            marker: "gray".to_string(),
        }
    }
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use rust_chessboard::core::BoardConfig;
///
/// let config = BoardConfig::new().with_square_size(64).flipped();
/// assert_eq!(config.square_size, 64);
/// assert_eq!(config.board_size(), 512);
/// assert!(config.flipped);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Edge length of one square in pixels.
    pub square_size: u32,

    /// Draw rank 1 at the top (Black's point of view).
    pub flipped: bool,

    /// Square and marker colours.
    pub palette: Palette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            flipped: false,
            palette: Palette::default(),
        }
    }
}

impl BoardConfig {
    /// Create the default configuration (80px squares, White at the bottom).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the square edge length.
    #[must_use]
    pub fn with_square_size(mut self, size: u32) -> Self {
        assert!(size > 0, "Square size must be positive");
        assert!(
            size <= MAX_SQUARE_SIZE,
            "Square size must be at most {MAX_SQUARE_SIZE}"
        );
        self.square_size = size;
        self
    }

    /// Draw the board from Black's side.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flipped = true;
        self
    }

    /// Set whether the board is drawn from Black's side.
    #[must_use]
    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// Edge length of the whole board in pixels.
    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.square_size.saturating_mul(8)
    }
}
