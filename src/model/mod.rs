//! Data types produced by segmentation and extraction.
//!
//! All of these are derived, read-only values scoped to a single run.

mod book;
mod document;

pub use book::{BookMetadata, Extraction, QuoteCard};
pub use document::Sections;
