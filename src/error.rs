//! Error types for gutenquote library.

use std::io;
use thiserror::Error;

/// Result type alias for gutenquote operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while selecting and extracting a book.
#[derive(Error, Debug)]
pub enum Error {
    /// The header identifies the excluded reader edition.
    #[error("ebook is The New McGuffey Reader")]
    ExcludedEdition,

    /// The header declares a language other than the accepted one.
    #[error("ebook isn't in the accepted language: {0}")]
    UnsupportedLanguage(String),

    /// No `Title:` field was found in the header.
    #[error("title was not found")]
    TitleNotFound,

    /// No `Author:` field was found in the header.
    #[error("author was not found")]
    AuthorNotFound,

    /// No paragraph in the body is shaped like a quote of the right length.
    #[error("quote was not found")]
    QuoteNotFound,

    /// I/O error when reading the catalog.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The catalog has no entries to choose from.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// The requested book has no entry in the catalog.
    #[error("book not found - {0}")]
    BookNotFound(u32),

    /// A catalog entry does not start with a book number.
    #[error("invalid catalog entry: {0}")]
    InvalidCatalogEntry(String),

    /// Error while rendering results.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether the book itself was rejected by extraction.
    ///
    /// Rejections are specific to one book, so a caller picking books at
    /// random can move on to another one. Every other variant is an
    /// operational failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::ExcludedEdition
                | Error::UnsupportedLanguage(_)
                | Error::TitleNotFound
                | Error::AuthorNotFound
                | Error::QuoteNotFound
        )
    }
}
