//! Selection state: what the user has picked up, and where it may go.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, PieceKind, Square};

/// Legal moves from the selected origin.
///
/// A queen has at most 27 moves and a pawn at most 12 (with promotions),
/// so the common case never spills to the heap.
pub type Candidates = SmallVec<[Move; 28]>;

/// The controller's transient UI state.
///
/// Exactly one variant holds at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,

    /// A friendly piece is selected.
    Selected {
        /// Square of the selected piece.
        origin: Square,

        /// Legal moves starting at `origin` (possibly none).
        candidates: Candidates,
    },
}

impl SelectionState {
    /// Select `origin` with the given legal moves.
    #[must_use]
    pub fn selected(origin: Square, moves: impl IntoIterator<Item = Move>) -> Self {
        let candidates: Candidates = moves.into_iter().collect();
        debug_assert!(candidates.iter().all(|mv| mv.from == origin));
        SelectionState::Selected { origin, candidates }
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    /// Selected origin, if any.
    #[must_use]
    pub fn origin(&self) -> Option<Square> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selected { origin, .. } => Some(*origin),
        }
    }

    /// Candidate moves; empty when idle.
    #[must_use]
    pub fn candidates(&self) -> &[Move] {
        match self {
            SelectionState::Idle => &[],
            SelectionState::Selected { candidates, .. } => candidates,
        }
    }

    /// Distinct candidate destination squares, in candidate order.
    ///
    /// The four promotion variants of one pawn push collapse to one square.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        let mut out: Vec<Square> = Vec::new();
        for mv in self.candidates() {
            if !out.contains(&mv.to) {
                out.push(mv.to);
            }
        }
        out
    }

    /// The move a click on `target` commits, if any.
    ///
    /// The plain move wins; failing that, the queen promotion is taken.
    /// Under-promotions are never chosen from a click.
    #[must_use]
    pub fn move_to(&self, target: Square) -> Option<Move> {
        let SelectionState::Selected { origin, candidates } = self else {
            return None;
        };
        let plain = Move::new(*origin, target);
        let queen = Move::promoting(*origin, target, PieceKind::Queen);
        if candidates.contains(&plain) {
            Some(plain)
        } else if candidates.contains(&queen) {
            Some(queen)
        } else {
            None
        }
    }
}
