//! Zobrist hashing for board positions.
//!
//! Provides 64-bit position fingerprints for transposition lookups. Key
//! tables are generated once per board size and shared read-only across
//! computations.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rand::prelude::*;

use crate::board::{Board, Mark, Pos};

// Fixed seed for reproducibility; mixed with the board size so different
// dimensions get unrelated tables.
const KEY_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random key table for one board size: one `u64` per (cell, mark).
pub struct ZobristKeys {
    size: usize,
    keys: Box<[[u64; 2]]>,
}

impl ZobristKeys {
    fn new(size: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(KEY_SEED ^ size as u64);
        let mut keys = vec![[0u64; 2]; size * size];
        for cell in &mut keys {
            for key in cell.iter_mut() {
                *key = rng.gen();
            }
        }
        ZobristKeys {
            size,
            keys: keys.into_boxed_slice(),
        }
    }

    /// The shared key table for a board size.
    ///
    /// Population is idempotent: once a size is initialized the same table
    /// is returned forever, so outstanding fingerprints stay valid. The
    /// double-checked write lock makes concurrent first calls race-safe.
    #[must_use]
    pub fn for_size(size: usize) -> Arc<ZobristKeys> {
        if let Some(keys) = KEY_CACHE.read().get(&size) {
            return Arc::clone(keys);
        }
        let mut cache = KEY_CACHE.write();
        Arc::clone(
            cache
                .entry(size)
                .or_insert_with(|| Arc::new(ZobristKeys::new(size))),
        )
    }

    /// Key for one (cell, mark) combination. Out-of-range coordinates
    /// contribute zero rather than panicking (fails closed).
    #[inline]
    #[must_use]
    pub fn key(&self, pos: Pos, mark: Mark) -> u64 {
        self.keys
            .get(pos.row * self.size + pos.col)
            .map_or(0, |cell| cell[mark.index()])
    }

    /// Full-board fingerprint: XOR of the key of every occupied cell.
    /// Empty cells contribute nothing, so a blank board hashes to zero.
    #[must_use]
    pub fn fingerprint(&self, board: &Board) -> u64 {
        let mut hash = 0;
        for (pos, mark) in board.occupied() {
            hash ^= self.key(pos, mark);
        }
        hash
    }
}

static KEY_CACHE: Lazy<RwLock<HashMap<usize, Arc<ZobristKeys>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_size_shares_table() {
        let a = ZobristKeys::for_size(15);
        let b = ZobristKeys::for_size(15);
        assert!(Arc::ptr_eq(&a, &b), "re-initialization must be idempotent");
    }

    #[test]
    fn test_blank_board_hashes_to_zero() {
        let keys = ZobristKeys::for_size(9);
        let board = Board::new(9);
        assert_eq!(keys.fingerprint(&board), 0);
    }

    #[test]
    fn test_fingerprint_distinguishes_marks() {
        let keys = ZobristKeys::for_size(9);
        let x = Board::from_marks(&[
            "X........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .unwrap();
        let o = Board::from_marks(&[
            "O........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .unwrap();
        assert_ne!(keys.fingerprint(&x), keys.fingerprint(&o));
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let keys = ZobristKeys::for_size(9);
        let board = Board::from_marks(&[
            ".........",
            "..X......",
            "...O.....",
            "....X....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .unwrap();
        // XOR of the individual keys, accumulated in a different order
        let expected = keys.key(Pos::new(3, 4), Mark::X)
            ^ keys.key(Pos::new(1, 2), Mark::X)
            ^ keys.key(Pos::new(2, 3), Mark::O);
        assert_eq!(keys.fingerprint(&board), expected);
    }
}
