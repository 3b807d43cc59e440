//! Move generation and attack detection.
//!
//! Generation is two-stage:
//! 1. Pseudo-legal moves (piece movement rules, castling path checks)
//! 2. Legal filter: make the move on a copy and reject it if the mover's
//!    king is left attacked

use crate::core::{Move, Piece, PieceKind, Side, Square};

use super::board::{castling, Board};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// True iff `target` is attacked by any piece of side `by`.
///
/// Occupancy of `target` itself is ignored.
#[must_use]
pub fn is_attacked(board: &Board, target: Square, by: Side) -> bool {
    let is = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|s| board.piece_at(s)) == Some(Piece::new(kind, by))
    };

    // A pawn of `by` attacks diagonally forward, so look one rank behind.
    for df in [-1, 1] {
        if is(target.offset(df, -by.forward()), PieceKind::Pawn) {
            return true;
        }
    }

    if KNIGHT_STEPS
        .iter()
        .any(|&(df, dr)| is(target.offset(df, dr), PieceKind::Knight))
    {
        return true;
    }

    if KING_STEPS
        .iter()
        .any(|&(df, dr)| is(target.offset(df, dr), PieceKind::King))
    {
        return true;
    }

    let slider_hits = |dirs: &[(i8, i8)], kind: PieceKind| {
        dirs.iter().any(|&(df, dr)| {
            let mut cur = target;
            while let Some(next) = cur.offset(df, dr) {
                match board.piece_at(next) {
                    None => cur = next,
                    Some(p) => {
                        return p.side == by && (p.kind == kind || p.kind == PieceKind::Queen);
                    }
                }
            }
            false
        })
    };

    slider_hits(&ROOK_DIRS, PieceKind::Rook) || slider_hits(&BISHOP_DIRS, PieceKind::Bishop)
}

/// True iff `side`'s king is attacked.
#[must_use]
pub fn in_check(board: &Board, side: Side) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| is_attacked(board, king, side.opposite()))
}

/// All pseudo-legal moves for the side to move.
pub fn pseudo_legal_moves(board: &Board, out: &mut Vec<Move>) {
    let us = board.side_to_move();
    for (from, piece) in board.pieces() {
        if piece.side != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, us, out),
            PieceKind::Knight => step_moves(board, from, us, &KNIGHT_STEPS, out),
            PieceKind::Bishop => slide_moves(board, from, us, &BISHOP_DIRS, out),
            PieceKind::Rook => slide_moves(board, from, us, &ROOK_DIRS, out),
            PieceKind::Queen => {
                slide_moves(board, from, us, &ROOK_DIRS, out);
                slide_moves(board, from, us, &BISHOP_DIRS, out);
            }
            PieceKind::King => {
                step_moves(board, from, us, &KING_STEPS, out);
                castling_moves(board, from, us, out);
            }
        }
    }
}

/// All legal moves for the side to move, in generation order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    pseudo_legal_moves(board, &mut pseudo);

    let us = board.side_to_move();
    pseudo
        .into_iter()
        .filter(|&mv| {
            let mut next = board.clone();
            next.make_move(mv);
            !in_check(&next, us)
        })
        .collect()
}

/// Count leaf nodes of the legal move tree.
#[must_use]
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.make_move(mv);
            perft(&next, depth - 1)
        })
        .sum()
}

fn push_pawn_move(from: Square, to: Square, us: Side, out: &mut Vec<Move>) {
    let last_rank = us.opposite().back_rank();
    if to.rank() == last_rank {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(board: &Board, from: Square, us: Side, out: &mut Vec<Move>) {
    let fwd = us.forward();

    if let Some(one) = from.offset(0, fwd) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, us, out);

            let start_rank = match us {
                Side::White => 1,
                Side::Black => 6,
            };
            if from.rank() == start_rank {
                if let Some(two) = one.offset(0, fwd) {
                    if board.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, fwd) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.side != us => push_pawn_move(from, to, us, out),
            None if board.en_passant() == Some(to) => out.push(Move::new(from, to)),
            _ => {}
        }
    }
}

fn step_moves(board: &Board, from: Square, us: Side, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in steps {
        if let Some(to) = from.offset(df, dr) {
            if board.piece_at(to).map_or(true, |p| p.side != us) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn slide_moves(board: &Board, from: Square, us: Side, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    out.push(Move::new(from, to));
                    cur = to;
                }
                Some(p) => {
                    if p.side != us {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn castling_moves(board: &Board, from: Square, us: Side, out: &mut Vec<Move>) {
    let rank = us.back_rank();
    if from.rank() != rank || from.file() != 4 {
        return;
    }
    let (king_bit, queen_bit) = match us {
        Side::White => (castling::WHITE_KINGSIDE, castling::WHITE_QUEENSIDE),
        Side::Black => (castling::BLACK_KINGSIDE, castling::BLACK_QUEENSIDE),
    };
    let rights = board.castling_rights();
    if rights & (king_bit | queen_bit) == 0 {
        return;
    }
    let them = us.opposite();
    if is_attacked(board, from, them) {
        return;
    }

    let sq = |file: u8| Square::from_file_rank(file, rank);
    let empty = |file: u8| sq(file).is_some_and(|s| board.piece_at(s).is_none());
    let safe = |file: u8| sq(file).is_some_and(|s| !is_attacked(board, s, them));
    let rook = Some(Piece::new(PieceKind::Rook, us));

    if rights & king_bit != 0
        && sq(7).and_then(|s| board.piece_at(s)) == rook
        && empty(5)
        && empty(6)
        && safe(5)
        && safe(6)
    {
        if let Some(to) = sq(6) {
            out.push(Move::new(from, to));
        }
    }

    if rights & queen_bit != 0
        && sq(0).and_then(|s| board.piece_at(s)) == rook
        && empty(1)
        && empty(2)
        && empty(3)
        && safe(2)
        && safe(3)
    {
        if let Some(to) = sq(2) {
            out.push(Move::new(from, to));
        }
    }
}
