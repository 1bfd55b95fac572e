//! # gutenquote
//!
//! Short quotable passages from Project Gutenberg plaintext ebooks.
//!
//! A book is processed in two steps. The segmenter splits the raw text
//! into header, body and footer using the `START OF THE PROJECT` /
//! `END OF THE PROJECT` sentinels. The extractor reads the title and
//! author from the header, rebuilds paragraphs from the body and keeps
//! those that look like a short quotation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gutenquote::{extract_quotes, select::choose_quote};
//!
//! fn main() -> gutenquote::Result<()> {
//!     let text = std::fs::read_to_string("2701-0.txt")?;
//!     let extraction = extract_quotes(&text)?;
//!
//!     let mut rng = rand::thread_rng();
//!     if let Some(quote) = choose_quote(&extraction.quotes, &mut rng) {
//!         println!("{} by {}: {}", extraction.title(), extraction.author(), quote);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Extraction is pure: no I/O, no shared state, and every failure is
//! reported as a typed [`Error`] so callers can decide whether to try
//! another book.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
mod patterns;
pub mod render;
pub mod select;
pub mod source;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use extract::{assemble_paragraphs, extract, filter_quotes, is_quote, scan_metadata};
pub use model::{BookMetadata, Extraction, QuoteCard, Sections};
pub use parser::{normalize_line, segment, ExtractOptions, Region};
pub use render::JsonFormat;

/// Segment a raw book and extract its metadata and quotes.
///
/// # Example
///
/// ```no_run
/// use gutenquote::extract_quotes;
///
/// let text = std::fs::read_to_string("1342-0.txt").unwrap();
/// let extraction = extract_quotes(&text).unwrap();
/// println!("{} quotes found", extraction.quotes.len());
/// ```
pub fn extract_quotes(document: &str) -> Result<Extraction> {
    extract_quotes_with_options(document, &ExtractOptions::default())
}

/// Segment a raw book and extract with custom options.
///
/// # Example
///
/// ```no_run
/// use gutenquote::{extract_quotes_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_quote_len(60, 140);
/// let text = std::fs::read_to_string("1342-0.txt").unwrap();
/// let extraction = extract_quotes_with_options(&text, &options).unwrap();
/// ```
pub fn extract_quotes_with_options(document: &str, options: &ExtractOptions) -> Result<Extraction> {
    let sections = segment(document);
    extract(&sections.header, &sections.body, options)
}

/// Builder for extracting and presenting a quote from a book.
///
/// # Example
///
/// ```no_run
/// use gutenquote::Gutenquote;
///
/// let text = std::fs::read_to_string("2701-0.txt")?;
/// let card = Gutenquote::new()
///     .with_language("English")
///     .extract(&text)?
///     .card(2701, &mut rand::thread_rng());
/// # Ok::<(), gutenquote::Error>(())
/// ```
pub struct Gutenquote {
    options: ExtractOptions,
}

impl Gutenquote {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Set the accepted language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.options = self.options.with_language(language);
        self
    }

    /// Set the excluded edition marker.
    pub fn with_excluded_edition(mut self, edition: impl Into<String>) -> Self {
        self.options = self.options.with_excluded_edition(edition);
        self
    }

    /// Set the exclusive quote length band.
    pub fn with_quote_len(mut self, min: usize, max: usize) -> Self {
        self.options = self.options.with_quote_len(min, max);
        self
    }

    /// Current options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract from a raw book.
    pub fn extract(&self, document: &str) -> Result<GutenquoteResult> {
        let extraction = extract_quotes_with_options(document, &self.options)?;
        Ok(GutenquoteResult { extraction })
    }
}

impl Default for Gutenquote {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extracting a book.
pub struct GutenquoteResult {
    /// The extracted metadata and candidates
    pub extraction: Extraction,
}

impl GutenquoteResult {
    /// Choose a quote and build a card for the given book number.
    pub fn card<R: rand::Rng + ?Sized>(&self, book_id: u32, rng: &mut R) -> QuoteCard {
        // Extraction guarantees at least one quote.
        let quote = select::choose_quote(&self.extraction.quotes, rng).unwrap_or_default();
        QuoteCard::new(
            book_id,
            &self.extraction.metadata,
            quote,
            source::page_link(book_id),
        )
    }

    /// Get the extraction.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOOK: &str = "Title:  Moby Dick\n\
Author:  Herman Melville\n\
Language: English\n\
*** START OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***\n\
\n\
\"It was a dark and stormy night and nothing much else happened at all today really, truly\"\n\
\n\
*** END OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***\n";

    #[test]
    fn test_extract_quotes() {
        let extraction = extract_quotes(BOOK).unwrap();
        assert_eq!(extraction.title(), "Moby Dick");
        assert_eq!(extraction.author(), "Herman Melville");
        assert_eq!(extraction.quotes.len(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let builder = Gutenquote::default();
        assert_eq!(builder.options(), &ExtractOptions::default());
    }

    #[test]
    fn test_builder_chained() {
        let builder = Gutenquote::new()
            .with_language("French")
            .with_excluded_edition("Primer")
            .with_quote_len(1, 500);

        assert_eq!(builder.options().language, "French");
        assert_eq!(builder.options().excluded_edition, "Primer");
        assert_eq!(builder.options().max_quote_len, 500);
    }

    #[test]
    fn test_builder_rejects_language() {
        let result = Gutenquote::new().with_language("French").extract(BOOK);
        assert!(matches!(result, Err(Error::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_builder_card() {
        let mut rng = StdRng::seed_from_u64(3);
        let card = Gutenquote::new().extract(BOOK).unwrap().card(2701, &mut rng);
        assert_eq!(card.book_id, 2701);
        assert_eq!(card.title, "Moby Dick");
        assert_eq!(card.link, "https://gutenberg.org/ebooks/2701");
        assert!(card.quote.starts_with("\"It was"));
    }

    #[test]
    fn test_extract_empty_document() {
        assert!(matches!(extract_quotes(""), Err(Error::TitleNotFound)));
    }
}
