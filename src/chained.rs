//! Separate-chaining table.
//!
//! Buckets are singly-linked lists, newest entry first. Nodes are
//! bump-allocated in an [`Arena`] and linked by [`Idx`] handles, so
//! prepending is a single allocation plus a head swap.

use std::fmt;

use safe_bump::{Arena, Idx};

use crate::entry::{Entry, Lookup};
use crate::error::TableError;
use crate::hash::HashStrategy;
use crate::table::{TableStats, WordTable};

/// Default bucket count.
pub const CHAIN_CAPACITY: usize = 1000;

/// A chain link: one entry plus the next-older node in its bucket.
struct ChainNode {
    entry: Entry,
    next: Option<Idx<Self>>,
}

/// Fixed-capacity hash table resolving collisions by chaining.
///
/// Invariant: every node reachable from `heads[i]` holds a word whose
/// index under `strategy` is `i`. The bucket array never grows.
pub struct ChainedTable {
    nodes: Arena<ChainNode>,
    heads: Box<[Option<Idx<ChainNode>>]>,
    strategy: HashStrategy,
    len: usize,
}

impl ChainedTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, strategy: HashStrategy) -> Self {
        assert!(capacity > 0, "chained table capacity must be non-zero");
        Self {
            nodes: Arena::new(),
            heads: vec![None; capacity].into_boxed_slice(),
            strategy,
            len: 0,
        }
    }

    /// Creates an empty table with [`CHAIN_CAPACITY`] buckets.
    #[must_use]
    pub fn with_strategy(strategy: HashStrategy) -> Self {
        Self::new(CHAIN_CAPACITY, strategy)
    }

    /// Prepends `word` to its bucket. Never fails.
    pub fn push(&mut self, word: &str, line: u32) {
        let bucket = self.strategy.index(word, self.heads.len());
        let node = self.nodes.alloc(ChainNode {
            entry: Entry::new(word, line),
            next: self.heads[bucket],
        });
        self.heads[bucket] = Some(node);
        self.len += 1;
    }

    /// Number of entries chained in `bucket`.
    ///
    /// # Panics
    ///
    /// Panics if `bucket >= capacity`.
    #[must_use]
    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.chain(self.heads[bucket]).count()
    }

    /// Iterates a bucket from head to tail.
    fn chain(&self, head: Option<Idx<ChainNode>>) -> impl Iterator<Item = &Entry> + '_ {
        let mut cursor = head;
        std::iter::from_fn(move || {
            let node = self.nodes.get(cursor?);
            cursor = node.next;
            Some(&node.entry)
        })
    }
}

impl WordTable for ChainedTable {
    fn insert(&mut self, word: &str, line: u32) -> Result<(), TableError> {
        self.push(word, line);
        Ok(())
    }

    fn search(&self, word: &str) -> Lookup {
        let bucket = self.strategy.index(word, self.heads.len());
        let mut lookup = Lookup::default();
        for entry in self.chain(self.heads[bucket]) {
            lookup.comparisons += 1;
            if entry.word() == word {
                lookup.line = Some(entry.line());
                break;
            }
        }
        lookup
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.heads.len()
    }

    fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    fn stats(&self) -> TableStats {
        let (occupied, longest_run) = self
            .heads
            .iter()
            .map(|&head| self.chain(head).count())
            .filter(|&len| len > 0)
            .fold((0, 0), |(occupied, longest), len| {
                (occupied + 1, longest.max(len))
            });
        TableStats {
            capacity: self.heads.len(),
            entries: self.len,
            occupied,
            longest_run,
        }
    }
}

impl fmt::Debug for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("strategy", &self.strategy)
            .field("capacity", &self.heads.len())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
