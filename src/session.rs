//! Per-comparison state.

use canonical::{canonicalize, CanonicalizeConfig, CanonicalizedDocument, SynonymTable};
use overlap::{tuple_overlap_bounded, OverlapConfig, OverlapError, OverlapReport};

use crate::config::DetectorConfig;

/// State for exactly one comparison: the synonym table, both stage configs
/// and the running minimum word count across the documents canonicalized so
/// far.
///
/// A session produces a single ratio: [`compare`](Self::compare) consumes
/// it. Concurrent comparisons each build their own session; the synonym
/// table is only borrowed and can be shared between them.
///
/// A half-used session cannot be duplicated to reuse its running minimum:
///
/// ```compile_fail
/// use tuplecheck::{ComparisonSession, DetectorConfig, SynonymTable};
///
/// let synonyms = SynonymTable::new();
/// let mut session = ComparisonSession::new(&synonyms, &DetectorConfig::default());
/// session.canonicalize("one two");
/// let copy: ComparisonSession<'_> = session.clone();
/// ```
#[derive(Debug)]
pub struct ComparisonSession<'a> {
    synonyms: &'a SynonymTable,
    canonical_cfg: CanonicalizeConfig,
    overlap_cfg: OverlapConfig,
    min_word_count: usize,
}

impl<'a> ComparisonSession<'a> {
    pub fn new(synonyms: &'a SynonymTable, config: &DetectorConfig) -> Self {
        Self::with_configs(synonyms, config.canonical_config(), config.overlap_config())
    }

    pub fn with_configs(
        synonyms: &'a SynonymTable,
        canonical_cfg: CanonicalizeConfig,
        overlap_cfg: OverlapConfig,
    ) -> Self {
        Self {
            synonyms,
            canonical_cfg,
            overlap_cfg,
            min_word_count: usize::MAX,
        }
    }

    /// Canonicalizes one document and folds its word count into the
    /// session's running minimum.
    pub fn canonicalize(&mut self, text: &str) -> CanonicalizedDocument {
        let doc = canonicalize(text, self.synonyms, &self.canonical_cfg);
        self.min_word_count = self.min_word_count.min(doc.word_count);
        doc
    }

    /// Smallest word count seen so far, or `None` before any document.
    pub fn min_word_count(&self) -> Option<usize> {
        (self.min_word_count != usize::MAX).then_some(self.min_word_count)
    }

    pub fn overlap_config(&self) -> &OverlapConfig {
        &self.overlap_cfg
    }

    /// Canonicalizes both documents and computes how much of `candidate`
    /// reappears in `reference`.
    ///
    /// The tuple size is bounded by the minimum word count of every document
    /// this session has canonicalized, these two included.
    pub fn compare(
        mut self,
        candidate: &str,
        reference: &str,
    ) -> Result<OverlapReport, OverlapError> {
        let candidate = self.canonicalize(candidate);
        let reference = self.canonicalize(reference);
        tuple_overlap_bounded(
            candidate.as_slice(),
            reference.as_slice(),
            self.min_word_count,
            &self.overlap_cfg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(synonyms: &SynonymTable, n: i32) -> ComparisonSession<'_> {
        ComparisonSession::new(synonyms, &DetectorConfig::default().with_tuple_size(n))
    }

    #[test]
    fn min_word_count_starts_unset() {
        let synonyms = SynonymTable::new();
        assert_eq!(session(&synonyms, 3).min_word_count(), None);
    }

    #[test]
    fn min_word_count_tracks_smallest_document() {
        let synonyms = SynonymTable::new();
        let mut s = session(&synonyms, 3);
        s.canonicalize("one two three four five");
        assert_eq!(s.min_word_count(), Some(5));
        s.canonicalize("one two");
        assert_eq!(s.min_word_count(), Some(2));
        s.canonicalize("one two three");
        assert_eq!(s.min_word_count(), Some(2));
    }

    #[test]
    fn min_word_count_includes_leading_empty_token() {
        let synonyms = SynonymTable::new();
        let mut s = session(&synonyms, 3);
        s.canonicalize("  one two ");
        assert_eq!(s.min_word_count(), Some(3));
    }

    #[test]
    fn compare_with_synonyms() {
        let synonyms = SynonymTable::parse("big large huge");
        let report = session(&synonyms, 3)
            .compare("the big dog ran ", "the huge dog ran ")
            .unwrap();
        assert_eq!(report.ratio, 1.0);
        assert_eq!(report.to_string(), "100.0%");
    }

    #[test]
    fn compare_rejects_tuple_size_above_shorter_document() {
        let synonyms = SynonymTable::parse("big large huge");
        let res = session(&synonyms, 5).compare("the big dog ran ", "the huge dog ran ");
        assert_eq!(
            res,
            Err(OverlapError::TupleSizeExceedsDocument {
                n: 5,
                min_word_count: 4
            })
        );
    }

    #[test]
    fn earlier_documents_tighten_the_bound() {
        let synonyms = SynonymTable::new();
        let mut s = session(&synonyms, 3);
        s.canonicalize("tiny");
        let res = s.compare("a b c d", "a b c d");
        assert!(matches!(
            res,
            Err(OverlapError::TupleSizeExceedsDocument { min_word_count: 1, .. })
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let synonyms = SynonymTable::new();
        let mut first = session(&synonyms, 2);
        first.canonicalize("x");
        let second = session(&synonyms, 2);
        assert_eq!(second.min_word_count(), None);
        assert!(second.compare("a b c", "a b c").is_ok());
    }
}
