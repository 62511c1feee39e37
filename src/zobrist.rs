//! Zobrist hashing for checkers positions.
//!
//! Provides incrementally-updatable 64-bit position hashes used as a cheap
//! identity for whole positions.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][king][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 2],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 2];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.color.index()][usize::from(piece.king)][sq.as_index()]
    }

    #[inline]
    pub(crate) fn side(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinguish_men_and_kings() {
        let sq = Square(1, 0);
        let man = ZOBRIST.piece(Piece::man(Color::White), sq);
        let king = ZOBRIST.piece(Piece::king(Color::White), sq);
        assert_ne!(man, king);
        assert_ne!(man, ZOBRIST.piece(Piece::man(Color::Black), sq));
    }

    #[test]
    fn test_white_to_move_has_no_key() {
        assert_eq!(ZOBRIST.side(Color::White), 0);
        assert_ne!(ZOBRIST.side(Color::Black), 0);
    }
}
