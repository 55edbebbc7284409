//! Password strength checking over the four table configurations.
//!
//! Every configuration holds the same dictionary. Verdicts consult only
//! the two chained tables; the probing tables exist for comparison
//! counts in [`Report`]s.

use std::fmt;

use tracing::{debug, warn};

use crate::chained::ChainedTable;
use crate::config::CheckerConfig;
use crate::dictionary::Dictionary;
use crate::error::TableError;
use crate::hash::HashStrategy;
use crate::probing::ProbingTable;
use crate::table::{TableStats, WordTable};

/// One of the four collision-scheme × hash-function combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Separate chaining, stride hash.
    ChainedStride,
    /// Separate chaining, full hash.
    ChainedFull,
    /// Linear probing, stride hash.
    ProbingStride,
    /// Linear probing, full hash.
    ProbingFull,
}

impl TableKind {
    /// All kinds in report order.
    pub const ALL: [Self; 4] = [
        Self::ChainedStride,
        Self::ChainedFull,
        Self::ProbingStride,
        Self::ProbingFull,
    ];

    /// Hash function used by this kind.
    #[must_use]
    pub const fn strategy(self) -> HashStrategy {
        match self {
            Self::ChainedStride | Self::ProbingStride => HashStrategy::Stride,
            Self::ChainedFull | Self::ProbingFull => HashStrategy::Full,
        }
    }

    /// Collision scheme name.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::ChainedStride | Self::ChainedFull => "separate chaining",
            Self::ProbingStride | Self::ProbingFull => "linear probing",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.scheme(), self.strategy())
    }
}

/// The four tables, populated identically.
#[derive(Debug)]
pub struct TableSet {
    chained_stride: ChainedTable,
    chained_full: ChainedTable,
    probing_stride: ProbingTable,
    probing_full: ProbingTable,
}

impl TableSet {
    /// Creates four empty tables sized by `config`.
    ///
    /// # Panics
    ///
    /// Panics if either capacity in `config` is zero.
    #[must_use]
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            chained_stride: ChainedTable::new(config.chain_capacity, HashStrategy::Stride),
            chained_full: ChainedTable::new(config.chain_capacity, HashStrategy::Full),
            probing_stride: ProbingTable::new(config.probe_capacity, HashStrategy::Stride),
            probing_full: ProbingTable::new(config.probe_capacity, HashStrategy::Full),
        }
    }

    /// Returns the table of the given kind.
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &dyn WordTable {
        match kind {
            TableKind::ChainedStride => &self.chained_stride,
            TableKind::ChainedFull => &self.chained_full,
            TableKind::ProbingStride => &self.probing_stride,
            TableKind::ProbingFull => &self.probing_full,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut dyn WordTable {
        match kind {
            TableKind::ChainedStride => &mut self.chained_stride,
            TableKind::ChainedFull => &mut self.chained_full,
            TableKind::ProbingStride => &mut self.probing_stride,
            TableKind::ProbingFull => &mut self.probing_full,
        }
    }

    /// Inserts every dictionary entry into all four tables, in order.
    ///
    /// A table that runs out of room stops receiving words; the others
    /// carry on. Returns the tables that overflowed with their errors.
    pub fn populate(&mut self, dictionary: &Dictionary) -> Vec<(TableKind, TableError)> {
        let mut failures: Vec<(TableKind, TableError)> = Vec::new();
        for entry in dictionary {
            for kind in TableKind::ALL {
                if failures.iter().any(|(failed, _)| *failed == kind) {
                    continue;
                }
                if let Err(err) = self.table_mut(kind).insert(entry.word(), entry.line()) {
                    warn!(
                        table = %kind,
                        line = entry.line(),
                        error = %err,
                        "table overflow; skipping remaining words"
                    );
                    failures.push((kind, err));
                }
            }
        }
        debug!(words = dictionary.len(), overflowed = failures.len(), "populated tables");
        failures
    }

    /// Returns `true` if either chained table holds `word` exactly.
    #[must_use]
    pub fn in_dictionary(&self, word: &str) -> bool {
        self.chained_stride.contains(word) || self.chained_full.contains(word)
    }
}

/// Why a password was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weakness {
    /// Fewer characters than the configured minimum.
    TooShort {
        /// Character count of the password.
        length: usize,
        /// Configured minimum.
        minimum: usize,
    },
    /// The lowercased password is a dictionary word.
    DictionaryWord,
    /// The lowercased text before some digit is a dictionary word.
    WordWithDigit {
        /// The matching lowercased prefix.
        prefix: String,
    },
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length, minimum } => {
                write!(f, "too short ({length} < {minimum} characters)")
            }
            Self::DictionaryWord => f.write_str("found in dictionary"),
            Self::WordWithDigit { prefix } => {
                write!(f, "dictionary word {prefix:?} followed by a digit")
            }
        }
    }
}

/// Result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Verdict {
    /// No rule rejected the password.
    Strong,
    /// The first rule that rejected the password.
    Weak(Weakness),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Strong`].
    #[must_use]
    pub const fn is_strong(&self) -> bool {
        matches!(self, Self::Strong)
    }
}

/// Dictionary-backed password strength checker.
#[derive(Debug)]
pub struct PasswordChecker {
    tables: TableSet,
    config: CheckerConfig,
}

impl PasswordChecker {
    /// Builds the four tables from `dictionary`.
    ///
    /// Overflowing probing tables are logged and left partially filled;
    /// verdicts are unaffected since they use only the chained tables.
    ///
    /// # Panics
    ///
    /// Panics if either capacity in `config` is zero.
    #[must_use]
    pub fn new(config: CheckerConfig, dictionary: &Dictionary) -> Self {
        let mut tables = TableSet::new(&config);
        let _overflowed = tables.populate(dictionary);
        Self { tables, config }
    }

    /// Checker with default capacities over `dictionary`.
    #[must_use]
    pub fn with_dictionary(dictionary: &Dictionary) -> Self {
        Self::new(CheckerConfig::default(), dictionary)
    }

    /// The populated tables.
    #[must_use]
    pub const fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Applies the strength policy, stopping at the first failing rule:
    /// minimum length, whole-word match, then word-before-digit match.
    /// Matching is against the lowercased password.
    pub fn evaluate(&self, password: &str) -> Verdict {
        let length = password.chars().count();
        if length < self.config.min_length {
            return Verdict::Weak(Weakness::TooShort {
                length,
                minimum: self.config.min_length,
            });
        }
        if self.tables.in_dictionary(&password.to_lowercase()) {
            return Verdict::Weak(Weakness::DictionaryWord);
        }
        for (at, c) in password.char_indices() {
            if !c.is_ascii_digit() {
                continue;
            }
            let prefix = password[..at].to_lowercase();
            if self.tables.in_dictionary(&prefix) {
                return Verdict::Weak(Weakness::WordWithDigit { prefix });
            }
        }
        Verdict::Strong
    }

    /// Returns `true` if no policy rule rejects `password`.
    #[must_use]
    pub fn is_strong(&self, password: &str) -> bool {
        self.evaluate(password).is_strong()
    }

    /// Verdict plus the comparisons each table spends searching for the
    /// lowercased password.
    pub fn report(&self, password: &str) -> Report {
        let verdict = self.evaluate(password);
        let lowered = password.to_lowercase();
        let comparisons =
            TableKind::ALL.map(|kind| (kind, self.tables.table(kind).search(&lowered).comparisons));
        Report {
            password: password.to_owned(),
            verdict,
            comparisons,
        }
    }

    /// Occupancy of all four tables, in report order.
    #[must_use]
    pub fn stats(&self) -> [(TableKind, TableStats); 4] {
        TableKind::ALL.map(|kind| (kind, self.tables.table(kind).stats()))
    }
}

/// Per-password output of [`PasswordChecker::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Report {
    /// The password as entered.
    pub password: String,
    /// Strength verdict.
    pub verdict: Verdict,
    /// Comparisons spent by each table searching the lowercased password.
    pub comparisons: [(TableKind, usize); 4],
}

impl Report {
    /// Comparisons spent by the table of `kind`.
    #[must_use]
    pub fn comparisons_for(&self, kind: TableKind) -> usize {
        self.comparisons
            .iter()
            .find_map(|&(k, n)| (k == kind).then_some(n))
            .unwrap_or_default()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== testing password: {} ===", self.password)?;
        match &self.verdict {
            Verdict::Strong => writeln!(f, "strong: yes")?,
            Verdict::Weak(reason) => writeln!(f, "strong: no ({reason})")?,
        }
        for (kind, count) in &self.comparisons {
            writeln!(f, "{kind} checks: {count}")?;
        }
        Ok(())
    }
}
