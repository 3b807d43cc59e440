//! Unicode chess glyphs.

use crate::core::Piece;

/// Glyphs indexed by `[side][kind]`, kinds in `PieceKind::ALL` order.
const GLYPHS: [[char; 6]; 2] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

/// Glyph drawn for a piece.
///
/// ```
/// use rust_chessboard::core::{Piece, PieceKind, Side};
/// use rust_chessboard::ui::glyph;
///
/// assert_eq!(glyph(Piece::new(PieceKind::King, Side::White)), '♔');
/// assert_eq!(glyph(Piece::new(PieceKind::Pawn, Side::Black)), '♟');
/// ```
#[must_use]
pub fn glyph(piece: Piece) -> char {
    GLYPHS[piece.side.index()][piece.kind.index()]
}
