//! Events emitted by the interaction controller.
//!
//! Events are the only channel from the controller to a renderer. A renderer
//! folds them into whatever it draws; it never reads or writes controller
//! state directly.
//!
//! ## Event Kinds
//!
//! - `SelectionChanged` - origin and destination highlights were replaced
//! - `MoveApplied` - a move was committed to the position
//! - `GameEnded` - the position after the last move is terminal

use serde::{Deserialize, Serialize};

use crate::core::{Move, Square};
use crate::rules::GameResult;

/// Observation emitted by `InteractionController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// The highlighted origin and destinations changed.
    ///
    /// `origin: None` with empty destinations means "clear highlights".
    /// Each event replaces the previous highlight set.
    SelectionChanged {
        origin: Option<Square>,
        destinations: Vec<Square>,
    },

    /// A move was applied to the position; selection is now cleared.
    MoveApplied {
        #[serde(rename = "move")]
        mv: Move,
    },

    /// The game ended with this result.
    GameEnded { result: GameResult },
}

impl UiEvent {
    /// The "clear highlights" event.
    #[must_use]
    pub fn cleared() -> Self {
        UiEvent::SelectionChanged {
            origin: None,
            destinations: Vec::new(),
        }
    }
}

/// Destination for emitted events.
pub trait EventSink {
    /// Receive one event.
    fn emit(&mut self, event: UiEvent);
}

impl EventSink for Vec<UiEvent> {
    fn emit(&mut self, event: UiEvent) {
        self.push(event);
    }
}
