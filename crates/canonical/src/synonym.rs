//! Synonym table mapping word forms to their canonical ("main") form.
//!
//! A synonym source lists one group per line. The first word of a line is
//! the canonical form; every other word on the line becomes a key pointing
//! at it. Lines are lowercased and delimiter-collapsed exactly like document
//! text before splitting, so lookups never miss because of case or
//! punctuation.
//!
//! ```rust
//! use canonical::SynonymTable;
//!
//! let table = SynonymTable::parse("big large huge\nrun sprint");
//! assert_eq!(table.canonical_form("huge"), "big");
//! assert_eq!(table.canonical_form("sprint"), "run");
//! assert_eq!(table.canonical_form("dog"), "dog");
//! ```

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::delimiter::collapse_delimiters;
use crate::token::split_tokens;

/// Read-only lookup from non-canonical word forms to canonical forms.
///
/// Every key maps to exactly one value. When two groups claim the same key,
/// the group seen first wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SynonymTable {
    map: FxHashMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole synonym source, one group per line.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::new();
        for line in source.lines() {
            table.add_group(line);
        }
        table
    }

    /// Builds a table from already-split groups. Words are inserted verbatim
    /// (no lowercasing or filtering), first word of each group canonical.
    pub fn from_groups<G, I, W>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut table = Self::new();
        for group in groups {
            let mut words = group.into_iter();
            let Some(canonical) = words.next() else {
                continue;
            };
            for key in words {
                table.insert_key(key.as_ref(), canonical.as_ref());
            }
        }
        table
    }

    /// Adds one raw synonym line and returns how many new keys it inserted.
    ///
    /// A line starting with a delimiter splits into an empty first word, and
    /// the remaining words then map to the empty string. This matches how
    /// document text is tokenized.
    pub fn add_group(&mut self, line: &str) -> usize {
        let words = split_tokens(&collapse_delimiters(&line.to_lowercase()));
        let Some((canonical, keys)) = words.split_first() else {
            return 0;
        };
        let mut inserted = 0;
        for key in keys {
            if self.insert_key(key, canonical) {
                inserted += 1;
            }
        }
        inserted
    }

    fn insert_key(&mut self, key: &str, canonical: &str) -> bool {
        if self.map.contains_key(key) {
            return false;
        }
        self.map.insert(key.to_string(), canonical.to_string());
        true
    }

    /// Returns the canonical form registered for `word`, if any.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    /// Returns the canonical form of `word`; a word absent from the table is
    /// its own canonical form.
    pub fn canonical_form<'a>(&'a self, word: &'a str) -> &'a str {
        self.lookup(word).unwrap_or(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
