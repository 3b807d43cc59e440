//! Selection-and-move state machine.
//!
//! This module provides the interaction core of the board:
//! - **SelectionState**: `Idle` or `Selected { origin, candidates }`
//! - **InteractionController**: consumes clicks, queries the rules engine,
//!   commits moves
//! - **UiEvent**: what renderers observe
//!
//! ## Design Philosophy
//!
//! The controller owns the position exclusively. Renderers only see
//! emitted events and `&` snapshots, never a writable handle.
//!
//! ## Example Usage
//!
//! ```
//! use rust_chessboard::controller::{InteractionController, UiEvent};
//! use rust_chessboard::games::standard::StandardChess;
//!
//! let mut controller = InteractionController::new(StandardChess::new());
//!
//! // Clicking an empty square while idle does nothing.
//! assert!(controller.handle_click("e4".parse().unwrap()).is_empty());
//!
//! // Selecting a pawn highlights its pushes.
//! let events = controller.handle_click("e2".parse().unwrap());
//! assert_eq!(
//!     events,
//!     vec![UiEvent::SelectionChanged {
//!         origin: Some("e2".parse().unwrap()),
//!         destinations: vec!["e3".parse().unwrap(), "e4".parse().unwrap()],
//!     }]
//! );
//! ```

mod event;
mod interaction;
mod selection;

pub use event::{EventSink, UiEvent};
pub use interaction::InteractionController;
pub use selection::{Candidates, SelectionState};
