//! Header metadata scanning and eligibility checks.

use crate::error::{Error, Result};
use crate::model::BookMetadata;
use crate::parser::ExtractOptions;
use crate::patterns::{AUTHOR_RE, TITLE_RE};
use regex::Regex;

const LANGUAGE_FIELD: &str = "Language:";

/// Scan header lines for title and author and check eligibility.
///
/// The excluded edition and a foreign `Language:` field stop the scan on
/// the line where they appear. Only the first `Language:` line is
/// consulted. Later `Title:`/`Author:` lines replace earlier ones, so the
/// missing-field checks only run once the whole header has been read.
pub fn scan_metadata<S: AsRef<str>>(
    header: &[S],
    options: &ExtractOptions,
) -> Result<BookMetadata> {
    let mut title = String::new();
    let mut author = String::new();
    let mut language_seen = false;

    for line in header {
        let line = line.as_ref();
        if line.contains(options.excluded_edition.as_str()) {
            return Err(Error::ExcludedEdition);
        }

        if !language_seen && line.contains(LANGUAGE_FIELD) {
            language_seen = true;
            if !line.contains(options.language.as_str()) {
                return Err(Error::UnsupportedLanguage(line.to_string()));
            }
        }

        if let Some(value) = field_value(&TITLE_RE, line) {
            title = value;
        }

        if let Some(value) = field_value(&AUTHOR_RE, line) {
            author = value;
        }
    }

    if title.is_empty() {
        return Err(Error::TitleNotFound);
    }

    if author.is_empty() {
        return Err(Error::AuthorNotFound);
    }

    Ok(BookMetadata { title, author })
}

fn field_value(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(header: &[&str]) -> Result<BookMetadata> {
        scan_metadata(header, &ExtractOptions::default())
    }

    #[test]
    fn test_scan_metadata() {
        let meta = scan(&[
            "Title:  Moby Dick",
            "Author:  Herman Melville",
            "Language: English",
        ])
        .unwrap();
        assert_eq!(meta.title, "Moby Dick");
        assert_eq!(meta.author, "Herman Melville");
    }

    #[test]
    fn test_last_field_wins() {
        let meta = scan(&["Title: First", "Author: A", "Title: Second"]).unwrap();
        assert_eq!(meta.title, "Second");
    }

    #[test]
    fn test_excluded_edition() {
        let result = scan(&["Title: The New McGuffey Fourth Reader", "Author: Anon"]);
        assert!(matches!(result, Err(Error::ExcludedEdition)));
    }

    #[test]
    fn test_unsupported_language() {
        let result = scan(&["Title: Candide", "Author: Voltaire", "Language: French"]);
        match result {
            Err(Error::UnsupportedLanguage(line)) => assert_eq!(line, "Language: French"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_language_failure_short_circuits() {
        // The language check fires before the missing title is noticed
        let result = scan(&["Language: German"]);
        assert!(matches!(result, Err(Error::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_first_language_line_is_authoritative() {
        let meta = scan(&[
            "Title: T",
            "Author: A",
            "Language: English",
            "Language: French",
        ])
        .unwrap();
        assert_eq!(meta.title, "T");
    }

    #[test]
    fn test_missing_language_is_accepted() {
        assert!(scan(&["Title: T", "Author: A"]).is_ok());
    }

    #[test]
    fn test_title_not_found() {
        let result = scan(&["Author: Herman Melville", "Language: English"]);
        assert!(matches!(result, Err(Error::TitleNotFound)));
    }

    #[test]
    fn test_author_not_found() {
        let result = scan(&["Title: Moby Dick"]);
        assert!(matches!(result, Err(Error::AuthorNotFound)));
    }

    #[test]
    fn test_field_needs_value() {
        let result = scan(&["Title:", "Author: A"]);
        assert!(matches!(result, Err(Error::TitleNotFound)));
    }

    #[test]
    fn test_custom_language() {
        let options = ExtractOptions::new().with_language("French");
        let header = ["Title: Candide", "Author: Voltaire", "Language: French"];
        assert!(scan_metadata(&header, &options).is_ok());
    }
}
