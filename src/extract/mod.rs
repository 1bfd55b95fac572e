//! Metadata, paragraph and quote extraction from a segmented book.

mod metadata;
mod paragraphs;
mod quotes;

pub use metadata::scan_metadata;
pub use paragraphs::assemble_paragraphs;
pub use quotes::{filter_quotes, is_quote};

use crate::error::{Error, Result};
use crate::model::Extraction;
use crate::parser::ExtractOptions;

/// Extract title, author and quote candidates from header and body lines.
///
/// Header problems are reported before the body is looked at. The result
/// always holds at least one quote; otherwise [`Error::QuoteNotFound`] is
/// returned.
pub fn extract<H, B>(header: &[H], body: &[B], options: &ExtractOptions) -> Result<Extraction>
where
    H: AsRef<str>,
    B: AsRef<str>,
{
    let metadata = scan_metadata(header, options)?;

    let paragraphs = assemble_paragraphs(body);
    let quotes = filter_quotes(&paragraphs, options);
    if quotes.is_empty() {
        return Err(Error::QuoteNotFound);
    }

    Ok(Extraction {
        metadata,
        quotes,
        paragraph_count: paragraphs.len(),
    })
}
