//! Presentation support for front ends.
//!
//! - `BoardGeometry`: pixel to square mapping, orientation, marker size
//! - `glyph`: Unicode piece glyphs
//! - `HighlightState` / `BoardView`: event-driven render model
//!
//! Nothing here mutates the position. Front ends hold a `HighlightState`,
//! feed it the controller's events and capture a `BoardView` per frame.

mod geometry;
mod glyph;
mod view;

pub use geometry::{BoardGeometry, Rect};
pub use glyph::glyph;
pub use view::{BoardView, CellView, HighlightState, Shade};
