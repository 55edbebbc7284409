//! Word-list loading.
//!
//! A [`Dictionary`] is an ordered list of [`Entry`] values numbered by
//! their physical line in the source. Loading degrades gracefully:
//! [`Dictionary::load`] logs failures and keeps whatever was read.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::entry::Entry;
use crate::error::DictionaryError;

/// Word list fetched when no source is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://www.mit.edu/~ecprice/wordlist.10000";

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// A local file, one word per line.
    Path(PathBuf),
    /// An `http` or `https` URL serving one word per line.
    Url(String),
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_owned())
    }
}

impl FromStr for DictionarySource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_owned()))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Ordered dictionary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Entry>,
    lines_read: u32,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            lines_read: 0,
        }
    }

    /// Builds a dictionary from in-memory lines, numbering them from 1.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.push_line(word.as_ref());
        }
        dictionary
    }

    /// Loads from `source`, never failing.
    ///
    /// Errors are logged and the entries read before the failure are
    /// returned, so the result may be partial or empty.
    #[must_use]
    pub fn load(source: &DictionarySource) -> Self {
        let mut dictionary = Self::new();
        match dictionary.extend_from_source(source) {
            Ok(count) => debug!(%source, count, "loaded word list"),
            Err(err) => warn!(
                %source,
                error = %err,
                kept = dictionary.len(),
                "word list load failed; continuing with partial dictionary"
            ),
        }
        dictionary
    }

    /// Loads from `source`, failing on the first error.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the source cannot be opened, fetched
    /// or read to the end.
    pub fn try_load(source: &DictionarySource) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        dictionary.extend_from_source(source)?;
        Ok(dictionary)
    }

    /// Appends every word from `source`, returning how many were added.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] on open, fetch or read failure. Words
    /// read before the failure stay in the dictionary.
    pub fn extend_from_source(&mut self, source: &DictionarySource) -> Result<usize, DictionaryError> {
        match source {
            DictionarySource::Path(path) => {
                let file = File::open(path)?;
                self.extend_from_reader(BufReader::new(file))
            }
            DictionarySource::Url(url) => {
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                self.extend_from_reader(BufReader::new(response))
            }
        }
    }

    /// Appends every non-blank line of `reader`, returning how many were
    /// added. Blank lines still advance the line counter.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if reading fails. Words read before
    /// the failure stay in the dictionary.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, DictionaryError> {
        let before = self.entries.len();
        for line in reader.lines() {
            self.push_line(&line?);
        }
        Ok(self.entries.len() - before)
    }

    fn push_line(&mut self, line: &str) {
        self.lines_read += 1;
        let word = line.trim_end();
        if !word.is_empty() {
            self.entries.push(Entry::new(word, self.lines_read));
        }
    }

    /// Entries in read order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates entries in read order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
