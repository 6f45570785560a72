use std::borrow::Cow;

use tracing::debug;

use crate::config::CanonicalizeConfig;
use crate::delimiter::collapse_delimiters;
use crate::document::CanonicalizedDocument;
use crate::synonym::SynonymTable;
use crate::token::split_tokens;

/// Main entry point. Lowercases `text`, collapses delimiter runs, splits it
/// into tokens and rewrites every token found in `synonyms` to its canonical
/// form.
///
/// Never fails; empty input produces a single empty token.
pub fn canonicalize(
    text: &str,
    synonyms: &SynonymTable,
    cfg: &CanonicalizeConfig,
) -> CanonicalizedDocument {
    // Lowercasing first: it can turn non-ASCII characters into ASCII ones
    // (KELVIN SIGN -> 'k') that then survive delimiter filtering.
    let lowered: Cow<str> = if cfg.lowercase {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    };

    let collapsed = collapse_delimiters(lowered.as_ref());
    let mut tokens = split_tokens(&collapsed);

    if !cfg.keep_leading_empty_token
        && collapsed.starts_with(' ')
        && tokens.first().is_some_and(String::is_empty)
    {
        tokens.remove(0);
    }

    let mut rewritten = 0usize;
    for token in tokens.iter_mut() {
        if let Some(canonical) = synonyms.lookup(token) {
            *token = canonical.to_string();
            rewritten += 1;
        }
    }

    let doc = CanonicalizedDocument::from_tokens(tokens);
    debug!(
        word_count = doc.word_count,
        rewritten,
        input_len = text.len(),
        "canonicalized document"
    );
    doc
}
