//! Configuration types for the canonical text pipeline.
//!
//! [`CanonicalizeConfig`] controls the two knobs that can change the token
//! stream produced by [`canonicalize`](crate::canonicalize). The defaults
//! reproduce the reference word counts exactly and should only be changed
//! when comparisons against historical results are not needed.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert!(config.lowercase);
//! assert!(config.keep_leading_empty_token);
//! ```
//!
//! ## Dropping the leading empty token
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig {
//!     keep_leading_empty_token: false,
//!     ..Default::default()
//! };
//! assert!(config.lowercase);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the canonical text pipeline.
///
/// Cheap to clone and serializable so it can live inside a YAML config file:
///
/// ```yaml
/// lowercase: true
/// keep_leading_empty_token: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// If true, apply locale-free Unicode lowercasing before filtering.
    ///
    /// Synonym tables are always lowercased when parsed, so turning this off
    /// means capitalised words never match a synonym key.
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,

    /// If true, text that begins with a delimiter run yields an empty token
    /// at index 0.
    ///
    /// The empty token counts as a word and takes part in tuple windows, so
    /// `" the dog"` has a word count of 3 and its first 2-tuple is `" the"`.
    /// Setting this to `false` drops that token and changes word counts for
    /// any document that starts with punctuation or whitespace.
    ///
    /// # Default
    ///
    /// `true`
    pub keep_leading_empty_token: bool,
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            keep_leading_empty_token: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = CanonicalizeConfig::default();
        assert!(cfg.lowercase);
        assert!(cfg.keep_leading_empty_token);
    }
}
