//! Book metadata and extraction results.

use serde::{Deserialize, Serialize};

/// Required metadata read from a book's header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Value of the `Title:` field
    pub title: String,

    /// Value of the `Author:` field
    pub author: String,
}

/// Successful result of extracting a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Title and author
    pub metadata: BookMetadata,

    /// Quote candidates in paragraph order (never empty)
    pub quotes: Vec<String>,

    /// Number of paragraphs assembled from the body
    pub paragraph_count: usize,
}

impl Extraction {
    /// Book title.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Book author.
    pub fn author(&self) -> &str {
        &self.metadata.author
    }
}

/// A chosen quote ready to be printed or posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCard {
    /// Catalog number of the book
    pub book_id: u32,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// The selected quote, exactly as extracted
    pub quote: String,

    /// Public viewer link for the book
    pub link: String,
}

impl QuoteCard {
    /// Build a card from an extraction and the quote chosen from it.
    pub fn new(
        book_id: u32,
        metadata: &BookMetadata,
        quote: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            book_id,
            title: metadata.title.clone(),
            author: metadata.author.clone(),
            quote: quote.into(),
            link: link.into(),
        }
    }
}
