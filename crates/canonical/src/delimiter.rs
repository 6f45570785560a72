//! Delimiter normalization.
//!
//! Every character that is not an ASCII letter or digit is a delimiter.
//! [`collapse_delimiters`] replaces each maximal run of delimiters with a
//! single ASCII space, so the output contains only `[A-Za-z0-9 ]` and never
//! two spaces in a row.
//!
//! Unlike whitespace collapsing, the edges are **not** trimmed: a leading
//! delimiter run becomes one leading space and a trailing run one trailing
//! space. [`split_tokens`](crate::split_tokens) decides what those edge
//! spaces mean for the token stream.
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_delimiters;
//!
//! assert_eq!(collapse_delimiters("hello,   world!"), "hello world ");
//! assert_eq!(collapse_delimiters("--the dog"), " the dog");
//! ```

/// Replaces every maximal run of non-ASCII-alphanumeric characters with a
/// single space.
///
/// Non-ASCII letters (accented Latin, CJK, emoji) are delimiters too, so
/// `"café"` collapses to `"caf "`.
///
/// # Examples
///
/// ```rust
/// use canonical::collapse_delimiters;
///
/// assert_eq!(collapse_delimiters("it's 100% fun"), "it s 100 fun");
/// assert_eq!(collapse_delimiters("a\t\r\nb"), "a b");
/// assert_eq!(collapse_delimiters(""), "");
/// assert_eq!(collapse_delimiters("..."), " ");
/// ```
pub fn collapse_delimiters(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            collapsed.push(ch);
            in_run = false;
        } else if !in_run {
            collapsed.push(' ');
            in_run = true;
        }
    }
    collapsed
}
