//! Core value types: squares, sides, pieces, moves, configuration, hashing.
//!
//! Everything here is a small `Copy` or plain-data type shared by the rules
//! engine, the interaction controller and the renderer model.

pub mod square;
pub mod side;
pub mod piece;
pub mod chess_move;
pub mod config;
pub mod zobrist;

pub use square::{ParseSquareError, Square};
pub use side::{Side, SideMap};
pub use piece::{Piece, PieceKind};
pub use chess_move::{Move, ParseMoveError};
pub use config::{BoardConfig, Palette, DEFAULT_SQUARE_SIZE, MAX_SQUARE_SIZE};
pub use zobrist::ZobristKeys;
