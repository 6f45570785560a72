/// Splits delimiter-collapsed text on single spaces.
///
/// The splitting rules are fixed because word counts and tuple windows
/// depend on them:
///
/// - text without any space yields exactly one token (the text itself, even
///   when it is empty);
/// - a leading space yields an empty token at index 0;
/// - trailing empty tokens are removed, so a trailing space yields nothing
///   and text made only of spaces yields no tokens at all.
///
/// Callers are expected to pass the output of
/// [`collapse_delimiters`](crate::collapse_delimiters). Consecutive spaces in
/// other input produce empty tokens in the interior.
///
/// # Examples
///
/// ```rust
/// use canonical::split_tokens;
///
/// assert_eq!(split_tokens("the dog "), vec!["the", "dog"]);
/// assert_eq!(split_tokens(" the dog"), vec!["", "the", "dog"]);
/// assert_eq!(split_tokens(""), vec![""]);
/// assert!(split_tokens(" ").is_empty());
/// ```
pub fn split_tokens(text: &str) -> Vec<String> {
    if !text.contains(' ') {
        return vec![text.to_string()];
    }

    let mut tokens: Vec<String> = text.split(' ').map(str::to_string).collect();
    while tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}
