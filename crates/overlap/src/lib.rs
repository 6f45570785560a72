//! # N-tuple overlap engine
//!
//! This crate measures how much of a *candidate* document reappears in a
//! *reference* document. Both documents arrive as canonical token sequences;
//! the engine slides a window of `N` tokens over each, and reports which
//! fraction of the candidate's windows also occur in the reference.
//!
//! ## Contract
//!
//! - The engine **only** consumes canonical tokens produced upstream. It
//!   never lowercases, filters or rewrites synonyms.
//! - The API is a pure function of `(candidate, reference, config)` with no
//!   I/O and no global state; concurrent comparisons never interact.
//!
//! ## Core Pipeline
//!
//! 1.  **Guards**: `N <= 0` fails with [`OverlapError::InvalidTupleSize`];
//!     `N` larger than the shorter document's word count fails with
//!     [`OverlapError::TupleSizeExceedsDocument`]. Nothing is extracted
//!     when a guard fails.
//!
//! 2.  **Extraction**: the candidate yields an ordered tuple list that keeps
//!     duplicates; the reference yields a deduplicated tuple set.
//!
//! 3.  **Counting**: every candidate tuple found in the reference set is one
//!     repetition. A tuple repeated three times in the candidate counts
//!     three times.
//!
//! 4.  **Ratio**: `repetitions / candidate_tuples`, within `[0, 1]`.
//!
//! ## Example Usage
//!
//! ```
//! use overlap::{tuple_overlap, OverlapConfig};
//!
//! let candidate = vec!["the", "big", "dog", "ran"];
//! let reference = vec!["the", "big", "dog", "sat"];
//! let config = OverlapConfig::default().with_tuple_size(3);
//!
//! let report = tuple_overlap(&candidate, &reference, &config).unwrap();
//!
//! assert_eq!(report.repetitions, 1);
//! assert_eq!(report.candidate_tuples, 2);
//! assert_eq!(report.ratio, 0.5);
//! ```
//!
pub mod config;
pub mod report;
mod tuples;

#[cfg(feature = "with_canonical")]
mod canonical_adapter;

use tracing::{info, warn};

pub use crate::config::{OverlapConfig, OverlapError, DEFAULT_TUPLE_SIZE};
pub use crate::report::{legacy_ratio, OverlapReport, FAILURE_SENTINEL};
pub use crate::tuples::{count_repetitions, tuple_list, tuple_set};

#[cfg(feature = "with_canonical")]
pub use crate::canonical_adapter::tuple_overlap_documents;

/// Compute the overlap ratio of `candidate` against `reference`, using the
/// shorter of the two token sequences as the word-count bound.
pub fn tuple_overlap<C, R>(
    candidate: &[C],
    reference: &[R],
    cfg: &OverlapConfig,
) -> Result<OverlapReport, OverlapError>
where
    C: AsRef<str> + Sync,
    R: AsRef<str> + Sync,
{
    let min_word_count = candidate.len().min(reference.len());
    tuple_overlap_bounded(candidate, reference, min_word_count, cfg)
}

/// Compute the overlap ratio with an explicit minimum word count.
///
/// `min_word_count` is the smallest word count observed across both
/// documents during canonicalization. The tuple size is checked against it
/// before any tuple is built.
pub fn tuple_overlap_bounded<C, R>(
    candidate: &[C],
    reference: &[R],
    min_word_count: usize,
    cfg: &OverlapConfig,
) -> Result<OverlapReport, OverlapError>
where
    C: AsRef<str> + Sync,
    R: AsRef<str> + Sync,
{
    // --- Guards ---
    let n = match cfg.validate() {
        Ok(n) => n,
        Err(err) => {
            warn!(error = %err, "overlap_rejected");
            return Err(err);
        }
    };
    if n > min_word_count {
        let err = OverlapError::TupleSizeExceedsDocument {
            n: cfg.tuple_size,
            min_word_count,
        };
        warn!(error = %err, "overlap_rejected");
        return Err(err);
    }

    // --- Extraction ---
    let (candidate_tuples, reference_set) = if cfg.use_parallel {
        rayon::join(|| tuple_list(candidate, n), || tuple_set(reference, n))
    } else {
        (tuple_list(candidate, n), tuple_set(reference, n))
    };

    // Only reachable when the caller's bound is larger than the candidate.
    if candidate_tuples.is_empty() {
        warn!(
            tuple_size = n,
            candidate_words = candidate.len(),
            "overlap_empty_candidate"
        );
        return Err(OverlapError::EmptyCandidate);
    }

    // --- Counting ---
    let repetitions = count_repetitions(&candidate_tuples, &reference_set);
    let ratio = repetitions as f64 / candidate_tuples.len() as f64;

    info!(
        tuple_size = n,
        repetitions,
        candidate_tuples = candidate_tuples.len(),
        reference_tuples = reference_set.len(),
        ratio,
        "overlap_computed"
    );

    Ok(OverlapReport {
        tuple_size: n,
        repetitions,
        candidate_tuples: candidate_tuples.len(),
        reference_tuples: reference_set.len(),
        ratio,
    })
}
