//! Dictionary entries and per-call lookup results.

/// A dictionary word together with the line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    line: u32,
}

impl Entry {
    /// Creates an entry. `line` is 1-based.
    #[must_use]
    pub fn new(word: impl Into<String>, line: u32) -> Self {
        Self {
            word: word.into(),
            line,
        }
    }

    /// The word as it was loaded, without case folding.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 1-based line number in the source word list.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Outcome of a single `search` call.
///
/// The comparison count belongs to the call, not the table, so
/// repeated or interleaved searches never observe each other's counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Lookup {
    /// Line number of the matching entry, if the word was found.
    pub line: Option<u32>,
    /// Equality checks performed during this search.
    pub comparisons: usize,
}

impl Lookup {
    /// Returns `true` if the search found an exact match.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.line.is_some()
    }
}
