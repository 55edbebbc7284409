//! Open-addressing table with linear probing.

use std::fmt;

use crate::entry::{Entry, Lookup};
use crate::error::TableError;
use crate::hash::HashStrategy;
use crate::table::{TableStats, WordTable};

/// Default slot count.
pub const PROBE_CAPACITY: usize = 20_000;

/// Fixed-capacity hash table resolving collisions by linear probing.
///
/// Invariant: an entry sits at the first empty slot found by walking
/// forward (with wrap-around) from its hash index at insertion time.
/// There is no deletion, so no tombstones are needed.
pub struct ProbingTable {
    slots: Box<[Option<Entry>]>,
    strategy: HashStrategy,
    len: usize,
}

impl ProbingTable {
    /// Creates an empty table with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, strategy: HashStrategy) -> Self {
        assert!(capacity > 0, "probing table capacity must be non-zero");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            strategy,
            len: 0,
        }
    }

    /// Creates an empty table with [`PROBE_CAPACITY`] slots.
    #[must_use]
    pub fn with_strategy(strategy: HashStrategy) -> Self {
        Self::new(PROBE_CAPACITY, strategy)
    }

    /// Returns the entry stored at `slot`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= capacity`.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Entry> {
        self.slots[slot].as_ref()
    }

    #[inline]
    fn advance(&self, slot: usize) -> usize {
        (slot + 1) % self.slots.len()
    }

    /// Longest run of consecutive filled slots, wrapping past the end.
    fn longest_cluster(&self) -> usize {
        let capacity = self.slots.len();
        if self.len == capacity {
            return capacity;
        }
        // Start just after an empty slot so no cluster is split by the wrap.
        let start = self
            .slots
            .iter()
            .position(Option::is_none)
            .map_or(0, |empty| empty + 1);
        let mut longest = 0;
        let mut run = 0;
        for offset in 0..capacity {
            if self.slots[(start + offset) % capacity].is_some() {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }
}

impl WordTable for ProbingTable {
    fn insert(&mut self, word: &str, line: u32) -> Result<(), TableError> {
        if self.len == self.slots.len() {
            return Err(TableError::CapacityExceeded {
                capacity: self.slots.len(),
            });
        }
        let mut slot = self.strategy.index(word, self.slots.len());
        while self.slots[slot].is_some() {
            slot = self.advance(slot);
        }
        self.slots[slot] = Some(Entry::new(word, line));
        self.len += 1;
        Ok(())
    }

    fn search(&self, word: &str) -> Lookup {
        let start = self.strategy.index(word, self.slots.len());
        let mut slot = start;
        let mut lookup = Lookup::default();
        while let Some(entry) = &self.slots[slot] {
            lookup.comparisons += 1;
            if entry.word() == word {
                lookup.line = Some(entry.line());
                break;
            }
            slot = self.advance(slot);
            if slot == start {
                break;
            }
        }
        lookup
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.slots.len(),
            entries: self.len,
            occupied: self.len,
            longest_run: self.longest_cluster(),
        }
    }
}

impl fmt::Debug for ProbingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingTable")
            .field("strategy", &self.strategy)
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
