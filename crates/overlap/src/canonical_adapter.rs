use canonical::CanonicalizedDocument;

use crate::config::{OverlapConfig, OverlapError};
use crate::report::OverlapReport;
use crate::tuple_overlap_bounded;

/// Compare two canonicalized documents directly, bounding `N` by the
/// smaller of their word counts.
pub fn tuple_overlap_documents(
    candidate: &CanonicalizedDocument,
    reference: &CanonicalizedDocument,
    cfg: &OverlapConfig,
) -> Result<OverlapReport, OverlapError> {
    let min_word_count = candidate.word_count.min(reference.word_count);
    tuple_overlap_bounded(candidate.as_slice(), reference.as_slice(), min_word_count, cfg)
}
