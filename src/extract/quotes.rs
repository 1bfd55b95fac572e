//! Quote-shape and length filtering.

use crate::parser::ExtractOptions;
use crate::patterns::QUOTE_SHAPE_RE;

/// Check whether a paragraph is a quote candidate.
///
/// The paragraph must open with `"`, close with `"` (optionally followed
/// by whitespace) and have at least one character in between. Its length
/// in characters, trailing whitespace included, must fall strictly inside
/// the configured band.
pub fn is_quote(paragraph: &str, options: &ExtractOptions) -> bool {
    QUOTE_SHAPE_RE.is_match(paragraph) && options.accepts_len(paragraph.chars().count())
}

/// Keep the paragraphs that are quote candidates, in order.
pub fn filter_quotes<S: AsRef<str>>(paragraphs: &[S], options: &ExtractOptions) -> Vec<String> {
    paragraphs
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| is_quote(p, options))
        .map(str::to_string)
        .collect()
}
