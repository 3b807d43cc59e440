//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for the current position
//! - How moves modify the position
//! - Win/draw conditions
//!
//! The interaction controller calls into `RulesEngine` but never interprets
//! chess rules directly.

pub mod engine;

pub use engine::{GameResult, IllegalMoveError, RulesEngine};
