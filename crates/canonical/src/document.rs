//! Document types for the canonical text pipeline.
//!
//! A [`CanonicalizedDocument`] holds the ordered token sequence produced by
//! [`canonicalize`](crate::canonicalize) and its word count. Order matters:
//! it decides tuple boundaries downstream.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig, SynonymTable};
//!
//! let synonyms = SynonymTable::parse("big large huge");
//! let doc = canonicalize("The HUGE dog.", &synonyms, &CanonicalizeConfig::default());
//!
//! assert_eq!(doc.tokens, vec!["the", "big", "dog"]);
//! assert_eq!(doc.word_count, 3);
//! ```

use serde::{Deserialize, Serialize};

/// The canonical token sequence of one document.
///
/// Immutable once built. `word_count` always equals `tokens.len()`, empty
/// edge tokens included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedDocument {
    /// Synonym-rewritten tokens in document order.
    pub tokens: Vec<String>,
    /// Number of tokens, including an empty leading token if present.
    pub word_count: usize,
}

impl CanonicalizedDocument {
    pub(crate) fn from_tokens(tokens: Vec<String>) -> Self {
        let word_count = tokens.len();
        Self { tokens, word_count }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl AsRef<[String]> for CanonicalizedDocument {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}
