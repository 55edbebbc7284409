//! String hashing — the two index functions the tables are built on.
//!
//! Both accumulate over characters in a wrapping 32-bit signed integer,
//! then reduce `|hash| mod capacity`. Overflow is part of the mixing.

use std::fmt;

/// Multiplier of the stride ("old") hash.
const STRIDE_MULTIPLIER: i32 = 37;

/// Multiplier of the full ("new") hash.
const FULL_MULTIPLIER: i32 = 31;

/// Number of samples the stride hash aims for.
const STRIDE_SAMPLES: usize = 8;

/// Hash function selected for a table at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashStrategy {
    /// Samples characters at stride `max(1, len / 8)` ("old hash").
    Stride,
    /// Visits every character ("new hash").
    Full,
}

impl HashStrategy {
    /// Both strategies, old first.
    pub const ALL: [Self; 2] = [Self::Stride, Self::Full];

    /// Returns the wrapped 32-bit accumulator for `word`.
    #[must_use]
    pub fn raw(self, word: &str) -> i32 {
        match self {
            Self::Stride => stride_raw(word),
            Self::Full => full_raw(word),
        }
    }

    /// Maps `word` to an index in `[0, capacity)`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn index(self, word: &str, capacity: usize) -> usize {
        reduce(self.raw(word), capacity)
    }

    /// Short human-readable name used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stride => "old hash",
            Self::Full => "new hash",
        }
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stride hash of `word` reduced into `[0, capacity)`.
///
/// # Panics
///
/// Panics if `capacity` is zero.
#[must_use]
pub fn stride_hash(word: &str, capacity: usize) -> usize {
    reduce(stride_raw(word), capacity)
}

/// Full hash of `word` reduced into `[0, capacity)`.
///
/// # Panics
///
/// Panics if `capacity` is zero.
#[must_use]
pub fn full_hash(word: &str, capacity: usize) -> usize {
    reduce(full_raw(word), capacity)
}

fn stride_raw(word: &str) -> i32 {
    let stride = (word.chars().count() / STRIDE_SAMPLES).max(1);
    word.chars()
        .step_by(stride)
        .fold(0_i32, |hash, c| accumulate(hash, STRIDE_MULTIPLIER, c))
}

fn full_raw(word: &str) -> i32 {
    word.chars()
        .fold(0_i32, |hash, c| accumulate(hash, FULL_MULTIPLIER, c))
}

#[inline]
#[allow(clippy::cast_possible_wrap)]
const fn accumulate(hash: i32, multiplier: i32, c: char) -> i32 {
    // Scalar values fit in 21 bits; the cast never wraps.
    hash.wrapping_mul(multiplier).wrapping_add(c as i32)
}

/// `unsigned_abs` keeps `i32::MIN` in range (as 2³¹) where a signed `abs`
/// would stay negative.
#[inline]
fn reduce(hash: i32, capacity: usize) -> usize {
    assert!(capacity > 0, "hash capacity must be non-zero");
    hash.unsigned_abs() as usize % capacity
}
