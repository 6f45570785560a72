//! Configuration and error types for the overlap engine.
//!
//! [`OverlapConfig`] carries the tuple size `N` for one comparison and
//! whether tuple extraction may run on the rayon pool. [`OverlapError`]
//! lists every way a comparison can refuse to produce a ratio.
//!
//! # Examples
//!
//! ```rust
//! use overlap::{OverlapConfig, OverlapError};
//!
//! let cfg = OverlapConfig::default();
//! assert_eq!(cfg.tuple_size, 3);
//! assert!(cfg.validate().is_ok());
//!
//! let bad = OverlapConfig::default().with_tuple_size(0);
//! assert_eq!(bad.validate(), Err(OverlapError::InvalidTupleSize { n: 0 }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuple size used when none is given.
pub const DEFAULT_TUPLE_SIZE: i32 = 3;

/// Configuration for one overlap comparison.
///
/// `tuple_size` is signed: values parsed from user input may be zero or
/// negative, and [`validate`](Self::validate) rejects them with
/// [`OverlapError::InvalidTupleSize`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OverlapConfig {
    /// Number of consecutive words per tuple (`N`). Must be >= 1.
    pub tuple_size: i32,
    /// Extract the candidate list and the reference set concurrently.
    ///
    /// Output is identical either way; only worth it for large documents.
    pub use_parallel: bool,
}

impl OverlapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuple_size(mut self, tuple_size: i32) -> Self {
        self.tuple_size = tuple_size;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Checks the tuple size and returns it as a window length.
    pub fn validate(&self) -> Result<usize, OverlapError> {
        if self.tuple_size < 1 {
            return Err(OverlapError::InvalidTupleSize { n: self.tuple_size });
        }
        usize::try_from(self.tuple_size)
            .map_err(|_| OverlapError::InvalidTupleSize { n: self.tuple_size })
    }
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            use_parallel: false,
        }
    }
}

/// Reasons an overlap comparison produces no ratio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlapError {
    #[error("invalid tuple size: N must be >= 1 (got {n})")]
    InvalidTupleSize { n: i32 },

    #[error("tuple size {n} exceeds the shorter document's word count ({min_word_count})")]
    TupleSizeExceedsDocument { n: i32, min_word_count: usize },

    #[error("candidate document produced no tuples")]
    EmptyCandidate,
}
