//! Deterministic Zobrist hashing keys.
//!
//! ## Key Features
//!
//! - **Deterministic**: keys come from a seeded ChaCha8 stream, so the same
//!   position hashes identically across runs and processes
//! - **Shared**: one table per process, built lazily on first use
//!
//! Keys are XOR-combined; see `games::standard` for how a position key is
//! assembled from piece placement, side to move, castling and en passant.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::OnceLock;

use super::piece::Piece;
use super::square::Square;

/// Seed for the process-wide key table.
pub const ZOBRIST_SEED: u64 = 0x5EED_C4E5_5B0A_12D5;

/// Random keys for every hashable position feature.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    pieces: [[u64; 64]; 12],
    black_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

impl ZobristKeys {
    /// Build a key table from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut pieces = [[0u64; 64]; 12];
        for table in &mut pieces {
            for key in table.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move = rng.gen();

        let mut castling = [0u64; 16];
        for key in &mut castling {
            *key = rng.gen();
        }

        let mut en_passant_file = [0u64; 8];
        for key in &mut en_passant_file {
            *key = rng.gen();
        }

        Self {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    /// The process-wide table built from `ZOBRIST_SEED`.
    #[must_use]
    pub fn shared() -> &'static ZobristKeys {
        static KEYS: OnceLock<ZobristKeys> = OnceLock::new();
        KEYS.get_or_init(|| ZobristKeys::new(ZOBRIST_SEED))
    }

    /// Key for a piece standing on a square.
    #[must_use]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.table_index()][square.index()]
    }

    /// Key XORed in when Black is to move.
    #[must_use]
    pub fn black_to_move(&self) -> u64 {
        self.black_to_move
    }

    /// Key for a 4-bit castling-rights mask.
    #[must_use]
    pub fn castling(&self, rights: u8) -> u64 {
        self.castling[(rights & 0x0F) as usize]
    }

    /// Key for an en-passant file (`0..8`).
    #[must_use]
    pub fn en_passant(&self, file: u8) -> u64 {
        self.en_passant_file[(file & 7) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceKind, Side};

    #[test]
    fn test_determinism() {
        let k1 = ZobristKeys::new(42);
        let k2 = ZobristKeys::new(42);
        let pawn = Piece::new(PieceKind::Pawn, Side::White);
        let e4: Square = "e4".parse().unwrap();

        assert_eq!(k1.piece(pawn, e4), k2.piece(pawn, e4));
        assert_eq!(k1.black_to_move(), k2.black_to_move());
    }

    #[test]
    fn test_different_seeds() {
        let k1 = ZobristKeys::new(1);
        let k2 = ZobristKeys::new(2);
        assert_ne!(k1.black_to_move(), k2.black_to_move());
    }

    #[test]
    fn test_piece_keys_distinct() {
        let keys = ZobristKeys::shared();
        let mut seen = std::collections::HashSet::new();
        for side in Side::ALL {
            for kind in PieceKind::ALL {
                for sq in Square::all() {
                    assert!(seen.insert(keys.piece(Piece::new(kind, side), sq)));
                }
            }
        }
    }

    #[test]
    fn test_shared_is_stable() {
        let a = ZobristKeys::shared() as *const ZobristKeys;
        let b = ZobristKeys::shared() as *const ZobristKeys;
        assert_eq!(a, b);
    }
}
