//! Common interface over the two collision-resolution schemes.

use std::fmt;

use crate::entry::Lookup;
use crate::error::TableError;
use crate::hash::HashStrategy;

/// A fixed-capacity word table with instrumented lookups.
///
/// Implemented by [`ChainedTable`](crate::ChainedTable) (separate chaining)
/// and [`ProbingTable`](crate::ProbingTable) (linear probing).
pub trait WordTable {
    /// Inserts `word` exactly as given. Duplicates are not detected.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CapacityExceeded`] if the table has no room.
    fn insert(&mut self, word: &str, line: u32) -> Result<(), TableError>;

    /// Searches for an exact, case-sensitive match of `word`.
    fn search(&self, word: &str) -> Lookup;

    /// Returns `true` if `word` is present.
    fn contains(&self, word: &str) -> bool {
        self.search(word).is_found()
    }

    /// Number of inserted entries, duplicates included.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been inserted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed number of buckets or slots.
    fn capacity(&self) -> usize;

    /// Hash function chosen at construction.
    fn strategy(&self) -> HashStrategy;

    /// Occupancy summary.
    fn stats(&self) -> TableStats;
}

/// Occupancy summary of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Fixed number of buckets or slots.
    pub capacity: usize,
    /// Number of inserted entries.
    pub entries: usize,
    /// Non-empty buckets (chaining) or filled slots (probing).
    pub occupied: usize,
    /// Longest chain (chaining) or longest contiguous cluster (probing).
    pub longest_run: usize,
}

impl TableStats {
    /// Entries per bucket or slot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.capacity as f64
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries={} capacity={} occupied={} longest_run={} load={:.3}",
            self.entries,
            self.capacity,
            self.occupied,
            self.longest_run,
            self.load_factor()
        )
    }
}
