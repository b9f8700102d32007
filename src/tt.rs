//! Transposition table for memoizing search evaluations.
//!
//! Keyed by Zobrist fingerprints. Each table is scoped to a single
//! top-level move computation: entries encode values relative to one fixed
//! bot-mark perspective and must not leak into unrelated searches.

use std::mem;

/// One memoized search result.
#[derive(Clone, Debug)]
pub struct TtEntry {
    pub hash: u64,
    /// Remaining depth the stored value was searched to. The value only
    /// bounds a search whose remaining depth is <= this.
    pub depth: u32,
    pub value: i32,
}

pub struct TranspositionTable {
    table: Vec<Option<TtEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TtEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size;

        num_entries = num_entries.next_power_of_two() / 2;
        if num_entries == 0 {
            num_entries = 1024;
        }

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Look up the entry for a fingerprint. The stored hash is verified in
    /// full, so index collisions never surface as false positives.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&TtEntry> {
        let index = self.index(hash);
        if let Some(entry) = &self.table[index] {
            if entry.hash == hash {
                return Some(entry);
            }
        }
        None
    }

    /// Store a search result, overwriting any same-or-shallower entry.
    /// A deeper stored search is kept in preference to a shallower one.
    pub fn store(&mut self, hash: u64, depth: u32, value: i32) {
        let index = self.index(hash);
        let should_replace = match &self.table[index] {
            Some(existing) => depth >= existing.depth,
            None => true,
        };

        if should_replace {
            self.table[index] = Some(TtEntry { hash, depth, value });
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(8)
    }
}
