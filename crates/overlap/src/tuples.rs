//! Tuple extraction for the overlap engine.
//!
//! A tuple is `N` consecutive tokens joined with single spaces. The candidate
//! side keeps every window in order (duplicates included); the reference side
//! only needs membership, so its windows go into a hash set. Both run in
//! O(L · N) over a token sequence of length L.

use fxhash::FxHashSet;

/// Joins one window of tokens with single spaces.
fn join_window<S: AsRef<str>>(window: &[S]) -> String {
    let capacity = window.iter().map(|w| w.as_ref().len() + 1).sum();
    let mut tuple = String::with_capacity(capacity);
    for (idx, word) in window.iter().enumerate() {
        if idx > 0 {
            tuple.push(' ');
        }
        tuple.push_str(word.as_ref());
    }
    tuple
}

/// Builds the ordered, duplicate-preserving tuple list.
///
/// Produces `L - N + 1` tuples, or none when `n == 0` or `n > L`.
pub fn tuple_list<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(tokens.len() - n + 1);
    out.extend(tokens.windows(n).map(join_window));
    out
}

/// Builds the deduplicated tuple membership set.
pub fn tuple_set<S: AsRef<str>>(tokens: &[S], n: usize) -> FxHashSet<String> {
    if n == 0 || tokens.len() < n {
        return FxHashSet::default();
    }
    tokens.windows(n).map(join_window).collect()
}

/// Counts candidate tuples (by occurrence) present in the reference set.
pub fn count_repetitions(candidate: &[String], reference: &FxHashSet<String>) -> usize {
    candidate
        .iter()
        .filter(|tuple| reference.contains(tuple.as_str()))
        .count()
}
