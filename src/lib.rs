//! Dictionary-based password strength checking over instrumented hash tables.
//!
//! The same word list is loaded into four fixed-capacity tables, crossing
//! two collision-resolution schemes with two string hashes:
//!
//! | | stride ("old") hash | full ("new") hash |
//! |---|---|---|
//! | separate chaining | [`ChainedTable`] | [`ChainedTable`] |
//! | linear probing | [`ProbingTable`] | [`ProbingTable`] |
//!
//! Every `search` returns a [`Lookup`] carrying the number of equality
//! checks it performed, so the cost of each combination can be compared
//! word by word. [`PasswordChecker`] uses the chained tables to reject
//! short passwords, dictionary words, and dictionary words followed by a
//! digit.
//!
//! # Key properties
//!
//! - **Fixed capacity**: tables never resize, keeping comparison counts
//!   comparable across configurations
//! - **Call-scoped instrumentation**: comparison counts are returned, not
//!   stored, so `search` takes `&self`
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod chained;
pub mod checker;
pub mod config;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod hash;
pub mod probing;
pub mod table;

#[cfg(test)]
mod tests;

pub use chained::ChainedTable;
pub use checker::{PasswordChecker, Report, TableKind, TableSet, Verdict, Weakness};
pub use config::CheckerConfig;
pub use dictionary::{Dictionary, DictionarySource};
pub use entry::{Entry, Lookup};
pub use error::{DictionaryError, TableError};
pub use hash::HashStrategy;
pub use probing::ProbingTable;
pub use table::{TableStats, WordTable};
