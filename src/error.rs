//! Error types.

use thiserror::Error;

/// Failure inserting into a fixed-capacity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Every slot is occupied; the table never grows.
    #[error("table is full: all {capacity} slots are occupied")]
    CapacityExceeded {
        /// Fixed slot count of the table.
        capacity: usize,
    },
}

/// Failure reading a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Reading a local file or stream failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    /// Fetching a remote word list failed.
    #[error("failed to fetch word list: {0}")]
    Http(#[from] reqwest::Error),
}
