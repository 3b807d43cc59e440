//! Standard chess game implementation.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, Piece, PieceKind, Side, Square};
use crate::rules::{GameResult, IllegalMoveError, RulesEngine};

use super::board::{Board, FenError};
use super::movegen;

/// Halfmove clock value at which the seventy-five-move rule ends the game.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game.
pub const FIVEFOLD: usize = 5;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Standard chess position plus the history needed for repetition rules.
///
/// Cloning is cheap: the board is a flat array and the repetition history
/// is a persistent vector.
#[derive(Clone, Debug)]
pub struct StandardChess {
    board: Board,
    /// Zobrist keys of every position since the last irreversible move,
    /// current position last.
    history: Vector<u64>,
}

impl StandardChess {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::start())
    }

    /// A game from an arbitrary FEN.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    fn from_board(board: Board) -> Self {
        let mut history = Vector::new();
        history.push_back(board.zobrist_key());
        Self { board, history }
    }

    /// Current position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_check(&self) -> bool {
        movegen::in_check(&self.board, self.board.side_to_move())
    }

    /// How often the current position has occurred.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        let key = self.board.zobrist_key();
        self.history.iter().filter(|&&k| k == key).count()
    }

    /// Why the game ended, or `None` while it continues.
    ///
    /// Checked in order: checkmate, insufficient material, stalemate,
    /// seventy-five-move rule, fivefold repetition.
    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        let no_moves = movegen::legal_moves(&self.board).is_empty();
        if no_moves && self.is_check() {
            return Some(Termination::Checkmate);
        }
        if self.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if no_moves {
            return Some(Termination::Stalemate);
        }
        if self.board.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Termination::SeventyFiveMoves);
        }
        if self.repetition_count() >= FIVEFOLD {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }

    /// Neither side can ever deliver mate.
    ///
    /// True for bare kings, a single minor piece, or any number of bishops
    /// that all stand on one square colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let material = self.board.material();
        let mut knights = 0;
        for (_, counts) in material.iter() {
            let heavy = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen];
            if heavy.iter().any(|kind| counts[kind.index()] > 0) {
                return false;
            }
            knights += counts[PieceKind::Knight.index()];
        }

        let bishops: Vec<Square> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::Bishop)
            .map(|(sq, _)| sq)
            .collect();
        match (knights, bishops.as_slice()) {
            (0 | 1, []) | (0, [_]) => true,
            (0, [first, rest @ ..]) => rest.iter().all(|sq| sq.is_dark() == first.is_dark()),
            _ => false,
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        movegen::perft(&self.board, depth)
    }

    /// Per-root-move leaf counts, for locating move generator faults.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> FxHashMap<Move, u64> {
        assert!(depth > 0, "perft_divide needs depth >= 1");
        movegen::legal_moves(&self.board)
            .into_iter()
            .map(|mv| {
                let mut next = self.board.clone();
                next.make_move(mv);
                (mv, movegen::perft(&next, depth - 1))
            })
            .collect()
    }
}

impl Default for StandardChess {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for StandardChess {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(&self.board)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if !self.legal_moves_from(mv.from).contains(&mv) {
            return Err(IllegalMoveError { mv });
        }
        let irreversible = self.board.make_move(mv);
        if irreversible {
            self.history.clear();
        }
        self.history.push_back(self.board.zobrist_key());
        Ok(())
    }

    fn result(&self) -> Option<GameResult> {
        self.termination().map(|termination| match termination {
            // The side to move is the one mated.
            Termination::Checkmate => GameResult::Winner(self.board.side_to_move().opposite()),
            _ => GameResult::Draw,
        })
    }
}
