//! Click-to-move interaction controller.
//!
//! Turns clicks on squares into committed moves:
//! 1. Click a friendly piece: it becomes selected, its legal moves become
//!    candidates
//! 2. Click a candidate destination: the move is applied
//! 3. Click another friendly piece: the selection moves there
//! 4. Click anything else: the selection is dropped
//!
//! Illegal input is never an error; it resolves to re-selection or
//! deselection.

use crate::core::Square;
use crate::rules::RulesEngine;
use crate::ui::BoardGeometry;

use super::event::{EventSink, UiEvent};
use super::selection::SelectionState;

/// Owns the position (through its rules engine) and the selection state.
///
/// ## Example
///
/// ```
/// use rust_chessboard::controller::{InteractionController, UiEvent};
/// use rust_chessboard::games::standard::StandardChess;
/// use rust_chessboard::core::Side;
/// use rust_chessboard::rules::RulesEngine;
///
/// let mut controller = InteractionController::new(StandardChess::new());
///
/// let events = controller.handle_click("e2".parse().unwrap());
/// assert!(matches!(events[0], UiEvent::SelectionChanged { .. }));
///
/// let events = controller.handle_click("e4".parse().unwrap());
/// assert!(matches!(events[0], UiEvent::MoveApplied { .. }));
/// assert_eq!(controller.engine().side_to_move(), Side::Black);
/// ```
#[derive(Clone, Debug)]
pub struct InteractionController<R: RulesEngine> {
    engine: R,
    selection: SelectionState,
}

impl<R: RulesEngine> InteractionController<R> {
    /// Create a controller in the `Idle` state.
    pub fn new(engine: R) -> Self {
        Self {
            engine,
            selection: SelectionState::Idle,
        }
    }

    /// Read-only access to the rules engine, for rendering.
    #[must_use]
    pub fn engine(&self) -> &R {
        &self.engine
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Handle a click on `square` and return the emitted events.
    pub fn handle_click(&mut self, square: Square) -> Vec<UiEvent> {
        let mut events = Vec::new();
        self.handle_click_into(square, &mut events);
        events
    }

    /// Handle a click in surface pixels.
    ///
    /// Clicks outside the board are ignored: no state change, no events.
    pub fn handle_pointer(&mut self, geometry: &BoardGeometry, x: i32, y: i32) -> Vec<UiEvent> {
        match geometry.square_at(x, y) {
            Some(square) => self.handle_click(square),
            None => {
                log::trace!("click at ({x}, {y}) outside the board");
                Vec::new()
            }
        }
    }

    /// Handle a click on `square`, writing events to `sink`.
    pub fn handle_click_into(&mut self, square: Square, sink: &mut impl EventSink) {
        if self.selection.is_idle() {
            if self.engine.is_friendly(square) {
                self.select(square, sink);
            }
            return;
        }

        if let Some(mv) = self.selection.move_to(square) {
            self.selection = SelectionState::Idle;
            if let Err(err) = self.engine.apply_move(mv) {
                log::error!("rules engine rejected candidate {mv}: {err}");
                panic!("candidate set out of sync with rules engine: {err}");
            }
            log::info!("{mv} applied");
            sink.emit(UiEvent::MoveApplied { mv });

            if let Some(result) = self.engine.result() {
                log::info!("game over: {result}");
                sink.emit(UiEvent::GameEnded { result });
            }
        } else if self.engine.is_friendly(square) {
            self.select(square, sink);
        } else {
            log::debug!("selection cleared by click on {square}");
            self.selection = SelectionState::Idle;
            sink.emit(UiEvent::cleared());
        }
    }

    /// Replace the position (start a new game) and drop any selection.
    pub fn reset(&mut self, engine: R) -> Vec<UiEvent> {
        self.engine = engine;
        let had_selection = !self.selection.is_idle();
        self.selection = SelectionState::Idle;
        if had_selection {
            vec![UiEvent::cleared()]
        } else {
            Vec::new()
        }
    }

    fn select(&mut self, origin: Square, sink: &mut impl EventSink) {
        self.selection = SelectionState::selected(origin, self.engine.legal_moves_from(origin));
        let destinations = self.selection.destinations();
        log::debug!("selected {origin}, {} destination(s)", destinations.len());
        sink.emit(UiEvent::SelectionChanged {
            origin: Some(origin),
            destinations,
        });
    }
}
