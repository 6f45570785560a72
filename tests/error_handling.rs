use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tuplecheck::{
    compare_files, compare_texts, legacy_ratio, DetectorConfig, LoadError, OverlapError,
    PipelineError, SynonymTable, FAILURE_SENTINEL,
};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

struct Fixture {
    dir: TempDir,
    synonyms: PathBuf,
    candidate: PathBuf,
    reference: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("tempdir");
    let synonyms = write(dir.path(), "syn.txt", "run sprint jog\n");
    let candidate = write(dir.path(), "one.txt", "we jog every day\n");
    let reference = write(dir.path(), "two.txt", "we run every day\n");
    Fixture {
        dir,
        synonyms,
        candidate,
        reference,
    }
}

#[test]
fn missing_synonym_file_is_load_error() {
    let f = fixture();
    let result = compare_files(
        f.dir.path().join("absent.txt"),
        &f.candidate,
        &f.reference,
        &DetectorConfig::default(),
    );
    match result {
        Err(PipelineError::Load(LoadError::Io { path, .. })) => {
            assert!(path.ends_with("absent.txt"));
        }
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
fn missing_document_is_load_error() {
    let f = fixture();
    let result = compare_files(
        &f.synonyms,
        &f.candidate,
        f.dir.path().join("ghost"),
        &DetectorConfig::default(),
    );
    let err = result.expect_err("reference is missing");
    assert!(matches!(err, PipelineError::Load(_)));
    assert_eq!(
        err.user_message(),
        "Please provide the correct file name(s) or format(s)."
    );
}

#[test]
fn identical_inputs_rejected_before_loading() {
    let f = fixture();
    let ghost = f.dir.path().join("never-written.txt");
    let result = compare_files(&f.synonyms, &ghost, &ghost, &DetectorConfig::default());
    assert!(matches!(result, Err(PipelineError::IdenticalInputs { .. })));
}

#[test]
fn identical_after_extension_resolution() {
    let f = fixture();
    let bare = f.dir.path().join("one");
    let result = compare_files(&f.synonyms, &bare, &f.candidate, &DetectorConfig::default());
    match result {
        Err(err @ PipelineError::IdenticalInputs { .. }) => {
            assert_eq!(
                err.user_message(),
                "Please provide two different files for detection."
            );
        }
        other => panic!("expected identical inputs, got {other:?}"),
    }
}

#[test]
fn empty_documents_rejected() {
    let f = fixture();
    let empty = write(f.dir.path(), "empty.txt", "");

    for (candidate, reference) in [(&empty, &f.reference), (&f.candidate, &empty)] {
        let result = compare_files(&f.synonyms, candidate, reference, &DetectorConfig::default());
        match result {
            Err(PipelineError::EmptyDocument { path }) => assert_eq!(&path, &empty),
            other => panic!("expected empty document, got {other:?}"),
        }
    }
}

#[test]
fn blank_line_document_reaches_the_engine() {
    let f = fixture();
    let blank = write(f.dir.path(), "blank.txt", "\n");
    let result = compare_files(&f.synonyms, &blank, &f.reference, &DetectorConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Overlap(OverlapError::TupleSizeExceedsDocument {
            min_word_count: 0,
            ..
        }))
    ));
}

#[test]
fn non_positive_tuple_sizes_rejected() {
    let f = fixture();
    for n in [0, -1, -42] {
        let cfg = DetectorConfig::default().with_tuple_size(n);
        let result = compare_files(&f.synonyms, &f.candidate, &f.reference, &cfg);
        match result {
            Err(err @ PipelineError::Overlap(OverlapError::InvalidTupleSize { .. })) => {
                assert_eq!(
                    err.user_message(),
                    "Please provide a N_Value smaller than the word count of both files."
                );
            }
            other => panic!("expected invalid tuple size for {n}, got {other:?}"),
        }
    }
}

#[test]
fn sentinel_for_every_failure_mode() {
    let synonyms = SynonymTable::new();
    let text = "one two three four";

    for n in [0, -5, 5, 100] {
        let cfg = DetectorConfig::default().with_tuple_size(n);
        let result = compare_texts(text, text, &synonyms, &cfg);
        assert!(result.is_err(), "n={n} should fail");
        assert_eq!(legacy_ratio(&result), FAILURE_SENTINEL);
    }
}

#[test]
fn successful_comparison_is_not_sentinel() {
    let f = fixture();
    let report = compare_files(&f.synonyms, &f.candidate, &f.reference, &DetectorConfig::default())
        .expect("comparison succeeds");
    assert_eq!(report.ratio, 1.0);
    assert_eq!(legacy_ratio(&Ok(report)), 1.0);
}

#[test]
fn failure_leaves_no_state_behind() {
    let f = fixture();
    let bad = DetectorConfig::default().with_tuple_size(50);
    assert!(compare_files(&f.synonyms, &f.candidate, &f.reference, &bad).is_err());

    let good = DetectorConfig::default();
    let report = compare_files(&f.synonyms, &f.candidate, &f.reference, &good)
        .expect("a fresh comparison is unaffected");
    assert_eq!(report.candidate_tuples, 2);
}
