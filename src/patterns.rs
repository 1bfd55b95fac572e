//! Cached regex patterns for segmentation and extraction.
//!
//! Compiled once on first use and shared by every extraction run.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a run of two or more ASCII whitespace characters inside a line
pub static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s){2,}").unwrap());

/// Matches a `Title:` header field and captures its value
pub static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Title:(?-u:\s)+(.+)").unwrap());

/// Matches an `Author:` header field and captures its value
pub static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Author:(?-u:\s)+(.+)").unwrap());

/// Matches a paragraph wrapped in straight double quotes
pub static QUOTE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^".+"(?-u:\s)*$"#).unwrap());

/// Matches the book number at the start of a catalog filename
pub static BOOK_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());
