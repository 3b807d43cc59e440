//! Mailbox board representation and FEN support.

use thiserror::Error;

use crate::core::{Move, Piece, PieceKind, Side, SideMap, Square, ZobristKeys};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling-right bits.
pub mod castling {
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: u8 = 0b1111;
}

/// Error parsing a FEN string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid piece placement: {0}")]
    Placement(String),
    #[error("invalid side to move: {0:?}")]
    SideToMove(String),
    #[error("invalid castling field: {0:?}")]
    Castling(String),
    #[error("invalid en passant field: {0:?}")]
    EnPassant(String),
    #[error("invalid move counter: {0:?}")]
    Counter(String),
    #[error("{0} must have exactly one king")]
    KingCount(Side),
}

/// Raw board state.
///
/// `Board` applies whatever move it is given; legality is decided by the
/// move generator before a move reaches `make_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    side_to_move: Side,
    castling: u8,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn start() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(board) => board,
            Err(err) => unreachable!("start FEN is valid: {err}"),
        }
    }

    /// Parse a board from FEN.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount(fields.len()));
        }

        let squares = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling_rights = 0u8;
        if fields[2] != "-" {
            for c in fields[2].chars() {
                let bit = match c {
                    'K' => castling::WHITE_KINGSIDE,
                    'Q' => castling::WHITE_QUEENSIDE,
                    'k' => castling::BLACK_KINGSIDE,
                    'q' => castling::BLACK_QUEENSIDE,
                    _ => return Err(FenError::Castling(fields[2].to_string())),
                };
                if castling_rights & bit != 0 {
                    return Err(FenError::Castling(fields[2].to_string()));
                }
                castling_rights |= bit;
            }
        }

        let en_passant = match fields[3] {
            "-" => None,
            text => {
                let sq: Square = text
                    .parse()
                    .map_err(|_| FenError::EnPassant(text.to_string()))?;
                let expected_rank = match side_to_move {
                    Side::White => 5,
                    Side::Black => 2,
                };
                if sq.rank() != expected_rank {
                    return Err(FenError::EnPassant(text.to_string()));
                }
                Some(sq)
            }
        };

        let halfmove_clock = fields[4]
            .parse()
            .map_err(|_| FenError::Counter(fields[4].to_string()))?;
        let fullmove_number: u32 = fields[5]
            .parse()
            .map_err(|_| FenError::Counter(fields[5].to_string()))?;
        if fullmove_number == 0 {
            return Err(FenError::Counter(fields[5].to_string()));
        }

        let mut board = Self {
            squares,
            side_to_move,
            castling: castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };

        let material = board.material();
        for side in Side::ALL {
            if material[side][PieceKind::King.index()] != 1 {
                return Err(FenError::KingCount(side));
            }
        }

        // Drop rights the placement cannot support.
        board.castling &= board.supported_castling();
        Ok(board)
    }

    /// Format as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                let sq = Square::from_file_rank(file, rank).unwrap_or_else(|| unreachable!());
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        });

        out.push(' ');
        if self.castling == 0 {
            out.push('-');
        } else {
            for (bit, c) in [
                (castling::WHITE_KINGSIDE, 'K'),
                (castling::WHITE_QUEENSIDE, 'Q'),
                (castling::BLACK_KINGSIDE, 'k'),
                (castling::BLACK_QUEENSIDE, 'q'),
            ] {
                if self.castling & bit != 0 {
                    out.push(c);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    // === Accessors ===

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Castling rights as a `castling::*` bitmask.
    #[must_use]
    pub fn castling_rights(&self) -> u8 {
        self.castling
    }

    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Square of `side`'s king.
    #[must_use]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        let king = Piece::new(PieceKind::King, side);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Iterate occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Piece counts per side, indexed by `PieceKind::index`.
    #[must_use]
    pub fn material(&self) -> SideMap<[u8; 6]> {
        let mut counts = SideMap::with_value([0u8; 6]);
        for (_, piece) in self.pieces() {
            counts[piece.side][piece.kind.index()] += 1;
        }
        counts
    }

    // === Mutation ===

    /// Apply a move without checking legality.
    ///
    /// Handles captures, en passant, castling rook hops, promotion, rights
    /// and clock bookkeeping. Returns true if the move was irreversible
    /// (pawn move or capture).
    pub fn make_move(&mut self, mv: Move) -> bool {
        let Some(moving) = self.piece_at(mv.from) else {
            debug_assert!(false, "make_move from empty square {}", mv.from);
            return false;
        };
        let mut captured = self.piece_at(mv.to);

        // En passant removes the pawn beside the destination.
        if moving.kind == PieceKind::Pawn
            && Some(mv.to) == self.en_passant
            && mv.from.file() != mv.to.file()
            && captured.is_none()
        {
            if let Some(victim_sq) = Square::from_file_rank(mv.to.file(), mv.from.rank()) {
                captured = self.squares[victim_sq.index()].take();
            }
        }

        // Castling moves the rook too.
        if moving.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() > mv.from.file() {
                (7, 5)
            } else {
                (0, 3)
            };
            if let (Some(rf), Some(rt)) = (
                Square::from_file_rank(rook_from, rank),
                Square::from_file_rank(rook_to, rank),
            ) {
                self.squares[rt.index()] = self.squares[rf.index()].take();
            }
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, moving.side),
            None => moving,
        };
        self.squares[mv.from.index()] = None;
        self.squares[mv.to.index()] = Some(placed);

        self.castling &= !(rights_touched(mv.from) | rights_touched(mv.to));

        self.en_passant = None;
        if moving.kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            let rank = (mv.from.rank() + mv.to.rank()) / 2;
            self.en_passant = Square::from_file_rank(mv.from.file(), rank);
        }

        let irreversible = moving.kind == PieceKind::Pawn || captured.is_some();
        if irreversible {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Side::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();

        irreversible
    }

    /// Zobrist key of this position.
    ///
    /// The en-passant file only contributes when a pawn of the side to move
    /// stands ready to capture there, so positions that differ only by an
    /// unusable en-passant square hash alike.
    #[must_use]
    pub fn zobrist_key(&self) -> u64 {
        let keys = ZobristKeys::shared();
        let mut key = 0u64;
        for (sq, piece) in self.pieces() {
            key ^= keys.piece(piece, sq);
        }
        if self.side_to_move == Side::Black {
            key ^= keys.black_to_move();
        }
        key ^= keys.castling(self.castling);
        if let Some(ep) = self.en_passant {
            if self.en_passant_capturable(ep) {
                key ^= keys.en_passant(ep.file());
            }
        }
        key
    }

    fn en_passant_capturable(&self, ep: Square) -> bool {
        let us = self.side_to_move;
        let pawn = Piece::new(PieceKind::Pawn, us);
        [-1i8, 1].iter().any(|&df| {
            ep.offset(df, -us.forward())
                .is_some_and(|sq| self.piece_at(sq) == Some(pawn))
        })
    }

    fn supported_castling(&self) -> u8 {
        let mut mask = 0;
        for (side, king_bit, queen_bit) in [
            (Side::White, castling::WHITE_KINGSIDE, castling::WHITE_QUEENSIDE),
            (Side::Black, castling::BLACK_KINGSIDE, castling::BLACK_QUEENSIDE),
        ] {
            let rank = side.back_rank();
            let at = |file: u8| Square::from_file_rank(file, rank).and_then(|sq| self.piece_at(sq));
            if at(4) != Some(Piece::new(PieceKind::King, side)) {
                continue;
            }
            let rook = Some(Piece::new(PieceKind::Rook, side));
            if at(7) == rook {
                mask |= king_bit;
            }
            if at(0) == rook {
                mask |= queen_bit;
            }
        }
        mask
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start()
    }
}

/// Castling rights lost when a move leaves or lands on `square`.
fn rights_touched(square: Square) -> u8 {
    match square.index() {
        0 => castling::WHITE_QUEENSIDE,
        4 => castling::WHITE_KINGSIDE | castling::WHITE_QUEENSIDE,
        7 => castling::WHITE_KINGSIDE,
        56 => castling::BLACK_QUEENSIDE,
        60 => castling::BLACK_KINGSIDE | castling::BLACK_QUEENSIDE,
        63 => castling::BLACK_KINGSIDE,
        _ => 0,
    }
}

fn parse_placement(text: &str) -> Result<[Option<Piece>; 64], FenError> {
    let bad = || FenError::Placement(text.to_string());
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != 8 {
        return Err(bad());
    }

    let mut squares = [None; 64];
    for (row, row_text) in rows.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in row_text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(bad());
                }
                file += run as u8;
            } else {
                let piece = Piece::from_symbol(c).ok_or_else(bad)?;
                let sq = Square::from_file_rank(file, rank).ok_or_else(bad)?;
                if piece.kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                    return Err(bad());
                }
                squares[sq.index()] = Some(piece);
                file += 1;
            }
            if file > 8 {
                return Err(bad());
            }
        }
        if file != 8 {
            return Err(bad());
        }
    }
    Ok(squares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position() {
        let board = Board::start();
        assert_eq!(board.side_to_move(), Side::White);
        assert_eq!(board.castling_rights(), castling::ALL);
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(PieceKind::King, Side::White)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(PieceKind::Queen, Side::Black)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3",
        ] {
            assert_eq!(Board::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(Board::from_fen("8/8/8 w - - 0"), Err(FenError::FieldCount(5)));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1"),
            Err(FenError::Placement(_))
        ));
        assert!(matches!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::SideToMove(_))
        ));
        assert!(matches!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KK - 0 1"),
            Err(FenError::Castling(_))
        ));
        assert!(matches!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Err(FenError::EnPassant(_))
        ));
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount(Side::Black))
        );
        assert!(matches!(
            Board::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::Placement(_))
        ));
    }

    #[test]
    fn test_material() {
        let board = Board::start();
        let material = board.material();
        for side in Side::ALL {
            assert_eq!(material[side], [8, 2, 2, 2, 1, 1]);
        }

        let board = Board::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1").unwrap();
        assert_eq!(board.material()[Side::White][PieceKind::Bishop.index()], 2);
        assert_eq!(board.material()[Side::Black], [0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_unsupported_castling_rights_dropped() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KQkq - 0 1").unwrap();
        assert_eq!(board.castling_rights(), castling::WHITE_KINGSIDE);
    }

    #[test]
    fn test_make_move_double_push_sets_en_passant() {
        let mut board = Board::start();
        let irreversible = board.make_move(Move::new(sq("e2"), sq("e4")));
        assert!(irreversible);
        assert_eq!(board.en_passant(), Some(sq("e3")));
        assert_eq!(board.side_to_move(), Side::Black);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);

        board.make_move(Move::new(sq("g8"), sq("f6")));
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn test_make_move_en_passant_capture() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").unwrap();
        board.make_move(Move::new(sq("e5"), sq("d6")));
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_at(sq("d6")), Some(Piece::new(PieceKind::Pawn, Side::White)));
    }

    #[test]
    fn test_make_move_castling() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.make_move(Move::new(sq("e1"), sq("g1")));
        assert_eq!(board.piece_at(sq("f1")), Some(Piece::new(PieceKind::Rook, Side::White)));
        assert_eq!(board.piece_at(sq("h1")), None);
        assert_eq!(board.castling_rights(), castling::BLACK_KINGSIDE | castling::BLACK_QUEENSIDE);

        board.make_move(Move::new(sq("e8"), sq("c8")));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(PieceKind::Rook, Side::Black)));
        assert_eq!(board.piece_at(sq("a8")), None);
        assert_eq!(board.castling_rights(), 0);
    }

    #[test]
    fn test_rook_capture_clears_rights() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.make_move(Move::new(sq("a1"), sq("a8")));
        assert_eq!(board.castling_rights(), castling::WHITE_KINGSIDE | castling::BLACK_KINGSIDE);
    }

    #[test]
    fn test_make_move_promotion() {
        let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        board.make_move(Move::promoting(sq("a7"), sq("a8"), PieceKind::Queen));
        assert_eq!(board.piece_at(sq("a8")), Some(Piece::new(PieceKind::Queen, Side::White)));
        assert_eq!(board.piece_at(sq("a7")), None);
    }

    #[test]
    fn test_counters_saturate() {
        let fen = "4k3/8/8/8/8/8/8/4K3 b - - 4294967295 4294967295";
        let mut board = Board::from_fen(fen).unwrap();
        board.make_move("e8d8".parse().unwrap());
        assert_eq!(board.halfmove_clock(), u32::MAX);
        assert_eq!(board.fullmove_number(), u32::MAX);
        assert!(board.to_fen().ends_with("w - - 4294967295 4294967295"));
    }

    #[test]
    fn test_zobrist_transposition() {
        let mut a = Board::start();
        for mv in ["g1f3", "g8f6", "b1c3"] {
            a.make_move(mv.parse().unwrap());
        }
        let mut b = Board::start();
        for mv in ["b1c3", "g8f6", "g1f3"] {
            b.make_move(mv.parse().unwrap());
        }
        assert_eq!(a.zobrist_key(), b.zobrist_key());
        assert_ne!(a.zobrist_key(), Board::start().zobrist_key());
    }

    #[test]
    fn test_zobrist_ignores_unusable_en_passant() {
        let mut a = Board::start();
        a.make_move("e2e4".parse().unwrap());
        let b = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .unwrap();
        assert_eq!(a.zobrist_key(), b.zobrist_key());
    }
}
