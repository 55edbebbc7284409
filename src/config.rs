//! Checker configuration.

use crate::chained::CHAIN_CAPACITY;
use crate::probing::PROBE_CAPACITY;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Table sizes and policy thresholds for a [`PasswordChecker`](crate::PasswordChecker).
///
/// All four tables of a checker share these capacities so their
/// comparison counts stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Bucket count of both chained tables.
    pub chain_capacity: usize,
    /// Slot count of both probing tables.
    pub probe_capacity: usize,
    /// Passwords shorter than this many characters are weak.
    pub min_length: usize,
}

impl CheckerConfig {
    /// Default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain_capacity: CHAIN_CAPACITY,
            probe_capacity: PROBE_CAPACITY,
            min_length: MIN_PASSWORD_LENGTH,
        }
    }

    /// Sets the chained-table bucket count.
    #[must_use]
    pub const fn with_chain_capacity(mut self, capacity: usize) -> Self {
        self.chain_capacity = capacity;
        self
    }

    /// Sets the probing-table slot count.
    #[must_use]
    pub const fn with_probe_capacity(mut self, capacity: usize) -> Self {
        self.probe_capacity = capacity;
        self
    }

    /// Sets the minimum password length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}
