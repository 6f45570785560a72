//! Canonical text layer for n-tuple overlap detection.
//!
//! This crate turns raw document text into the token sequence the overlap
//! engine compares. Two documents that say the same thing with different
//! synonyms, casing or punctuation end up with the same tokens.
//!
//! ## What we do
//!
//! - Unicode lowercasing (configurable)
//! - Delimiter collapsing: every run of non-ASCII-alphanumeric characters
//!   becomes a single space
//! - Tokenization on that single space, keeping an empty token when the
//!   text starts with a delimiter
//! - Synonym rewriting through a [`SynonymTable`]
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no global state. The same text, table and config
//! always produce the same [`CanonicalizedDocument`].
//!
//! ## Invariants worth knowing
//!
//! - `word_count == tokens.len()`, empty edge token included
//! - Tokens only contain `[a-z0-9]` (or `[A-Za-z0-9]` with lowercasing off),
//!   except for synonym values inserted verbatim via
//!   [`SynonymTable::from_groups`]
//! - Rewriting is a single pass; canonical forms are not looked up again

mod config;
mod delimiter;
mod document;
mod pipeline;
mod synonym;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::delimiter::collapse_delimiters;
pub use crate::document::CanonicalizedDocument;
pub use crate::pipeline::canonicalize;
pub use crate::synonym::SynonymTable;
pub use crate::token::split_tokens;
