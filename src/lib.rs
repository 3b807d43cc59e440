//! # rust-chessboard
//!
//! Click-to-move chess board: the interaction core of a two-player board
//! where the user selects a piece and then a destination.
//!
//! ## Design Principles
//!
//! 1. **Rules Are a Collaborator**: The controller never interprets chess
//!    rules. Everything about legality, move application and game end goes
//!    through the `RulesEngine` trait.
//!
//! 2. **Illegal Input Is Not an Error**: Every click resolves to selecting,
//!    re-selecting, committing or deselecting. Nothing is rejected.
//!
//! 3. **Events Out, Snapshots Only**: Renderers observe `UiEvent`s and
//!    read-only snapshots. They never mutate the position.
//!
//! ## Architecture
//!
//! - **Selection State Machine**: `Idle` or `Selected { origin, candidates }`,
//!   with candidates cached from the rules engine at selection time.
//!
//! - **Mailbox Board**: The standard rules engine keeps a 64-square array,
//!   generates pseudo-legal moves and filters them by king safety.
//!
//! - **Repetition History**: Zobrist keys in an `im::Vector`, so cloning a
//!   game is cheap.
//!
//! ## Modules
//!
//! - `core`: Squares, sides, pieces, moves, board configuration, hashing
//! - `rules`: RulesEngine trait and game results
//! - `games`: Rules engine implementations (standard chess)
//! - `controller`: Selection state machine and emitted events
//! - `ui`: Pixel geometry, glyphs and the render model

pub mod controller;
pub mod core;
pub mod games;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Move, Palette, Piece, PieceKind, Side, SideMap, Square, ZobristKeys,
};

pub use crate::rules::{GameResult, IllegalMoveError, RulesEngine};

pub use crate::games::standard::{FenError, StandardChess, Termination};

pub use crate::controller::{EventSink, InteractionController, SelectionState, UiEvent};

pub use crate::ui::{BoardGeometry, BoardView, HighlightState};
