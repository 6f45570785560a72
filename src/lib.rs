//! Workspace umbrella crate for n-tuple overlap ("plagiarism rate") detection.
//!
//! This crate stitches file loading, canonicalization and the overlap engine
//! together so callers can compare two documents with a single call:
//!
//! ```no_run
//! use tuplecheck::{compare_files, DetectorConfig};
//!
//! let report = compare_files("synonyms", "essay", "source", &DetectorConfig::default())?;
//! println!("{report}");
//! # Ok::<(), tuplecheck::PipelineError>(())
//! ```
//!
//! Stages can also be driven separately through [`ComparisonSession`],
//! [`canonicalize`] and [`tuple_overlap`].

pub use canonical::{
    canonicalize, collapse_delimiters, split_tokens, CanonicalizeConfig, CanonicalizedDocument,
    SynonymTable,
};
pub use overlap::{
    count_repetitions, legacy_ratio, tuple_list, tuple_overlap, tuple_overlap_bounded,
    tuple_overlap_documents, tuple_set, OverlapConfig, OverlapError, OverlapReport,
    DEFAULT_TUPLE_SIZE, FAILURE_SENTINEL,
};

mod config;
mod loader;
mod session;

pub use crate::config::{
    CanonicalYamlConfig, ConfigLoadError, DetectorConfig, InputYamlConfig, OverlapYamlConfig,
};
pub use crate::loader::{load_document_text, load_synonym_table, resolve_path, LoadError};
pub use crate::session::ComparisonSession;

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn, Level};

/// Errors that can occur while comparing two files end to end.
#[derive(Debug)]
pub enum PipelineError {
    Load(LoadError),
    IdenticalInputs { path: PathBuf },
    EmptyDocument { path: PathBuf },
    Overlap(OverlapError),
}

impl PipelineError {
    /// Fixed, user-facing diagnostic for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Load(_) => "Please provide the correct file name(s) or format(s).",
            PipelineError::IdenticalInputs { .. } => {
                "Please provide two different files for detection."
            }
            PipelineError::EmptyDocument { .. } => {
                "Please provide two non-empty files for detection."
            }
            PipelineError::Overlap(OverlapError::EmptyCandidate) => {
                "No tuples could be formed from the candidate file."
            }
            PipelineError::Overlap(_) => {
                "Please provide a N_Value smaller than the word count of both files."
            }
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Load(err) => write!(f, "load failure: {err}"),
            PipelineError::IdenticalInputs { path } => {
                write!(f, "both comparison inputs resolve to {}", path.display())
            }
            PipelineError::EmptyDocument { path } => {
                write!(f, "document {} is empty", path.display())
            }
            PipelineError::Overlap(err) => write!(f, "overlap computation failed: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Load(err) => Some(err),
            PipelineError::Overlap(err) => Some(err),
            PipelineError::IdenticalInputs { .. } | PipelineError::EmptyDocument { .. } => None,
        }
    }
}

impl From<LoadError> for PipelineError {
    fn from(value: LoadError) -> Self {
        PipelineError::Load(value)
    }
}

impl From<OverlapError> for PipelineError {
    fn from(value: OverlapError) -> Self {
        PipelineError::Overlap(value)
    }
}

/// Compare two in-memory documents with a fresh session.
pub fn compare_texts(
    candidate: &str,
    reference: &str,
    synonyms: &SynonymTable,
    cfg: &DetectorConfig,
) -> Result<OverlapReport, OverlapError> {
    ComparisonSession::new(synonyms, cfg).compare(candidate, reference)
}

/// Compare two files end to end.
///
/// Paths are resolved with the configured default extension first. The
/// comparison is refused before any file is read when both inputs resolve
/// to the same path, and after loading when either document is empty.
pub fn compare_files(
    synonym_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
    reference_path: impl AsRef<Path>,
    cfg: &DetectorConfig,
) -> Result<OverlapReport, PipelineError> {
    let ext = cfg.input.default_extension.as_deref();
    let synonym_path = resolve_path(synonym_path, ext);
    let candidate_path = resolve_path(candidate_path, ext);
    let reference_path = resolve_path(reference_path, ext);

    let span = tracing::span!(
        Level::INFO,
        "tuplecheck.compare_files",
        candidate = %candidate_path.display(),
        reference = %reference_path.display()
    );
    let _guard = span.enter();

    if candidate_path == reference_path {
        warn!("identical_inputs");
        return Err(PipelineError::IdenticalInputs {
            path: candidate_path,
        });
    }

    let synonyms = load_synonym_table(&synonym_path)?;
    let candidate = load_document_text(&candidate_path)?;
    let reference = load_document_text(&reference_path)?;

    for (path, text) in [(&candidate_path, &candidate), (&reference_path, &reference)] {
        if text.is_empty() {
            warn!(path = %path.display(), "empty_document");
            return Err(PipelineError::EmptyDocument { path: path.clone() });
        }
    }

    let report = compare_texts(&candidate, &reference, &synonyms, cfg)?;
    info!(
        synonyms = synonyms.len(),
        ratio = report.ratio,
        "comparison_complete"
    );
    Ok(report)
}
