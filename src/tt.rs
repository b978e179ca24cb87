//! Transposition table for caching search results.
//!
//! Keyed by [`Position::signature`](crate::board::Position::signature). The
//! table is owned by a single searcher, so slots are plain values rather than
//! atomics. One slot per index; collisions are resolved by the replacement
//! rule in [`TranspositionTable::store`].

use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub score: i32,
    pub bound_type: BoundType,
    pub depth: u32,
    pub generation: u16,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

/// Default table size in MB
pub const DEFAULT_TT_MB: usize = 16;

pub struct TranspositionTable {
    slots: Vec<Option<TTEntry>>,
    mask: usize,
    generation: u16,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<TTEntry>>();
        let mut num_slots = (size_mb * 1024 * 1024) / slot_size;

        // Power of two so the index is a mask
        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots == 0 {
            num_slots = 1024;
        }

        TranspositionTable {
            slots: vec![None; num_slots],
            mask: num_slots - 1,
            generation: 0,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }

    /// Marks the start of a new search; entries from earlier searches become
    /// replaceable regardless of depth.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Probe the table for an entry matching `key`.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        self.slots[self.index(key)].filter(|entry| entry.key == key)
    }

    /// Store an entry in the table.
    ///
    /// The slot is overwritten when it is empty, holds the same key, holds an
    /// entry from an older search, or holds an entry searched no deeper.
    pub fn store(&mut self, key: u64, depth: u32, score: i32, bound_type: BoundType) {
        let generation = self.generation;
        let idx = self.index(key);
        let replace = match &self.slots[idx] {
            None => true,
            Some(old) => old.key == key || old.generation != generation || depth >= old.depth,
        };
        if replace {
            self.slots[idx] = Some(TTEntry {
                key,
                score,
                bound_type,
                depth,
                generation,
            });
        }
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 slots for efficiency
        let sample_size = self.slots.len().min(1000);
        let occupied = self
            .slots
            .iter()
            .take(sample_size)
            .filter(|slot| slot.is_some())
            .count();
        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.generation = 0;
    }
}
