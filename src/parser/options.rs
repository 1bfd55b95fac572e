//! Extraction options and configuration.

/// Language accepted when no other tag is configured.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Edition family whose readers are never quoted.
pub const DEFAULT_EXCLUDED_EDITION: &str = "The New McGuffey";

/// Quote lengths must be strictly greater than this.
pub const DEFAULT_MIN_QUOTE_LEN: usize = 90;

/// Quote lengths must be strictly less than this.
pub const DEFAULT_MAX_QUOTE_LEN: usize = 113;

/// Options for extracting metadata and quotes from a segmented book.
///
/// The options are immutable once handed to the extractor; every run
/// receives its own copy instead of consulting global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Language tag that a `Language:` header line must contain
    pub language: String,

    /// Header substring identifying an edition that is always rejected
    pub excluded_edition: String,

    /// Exclusive lower bound on quote length, in characters
    pub min_quote_len: usize,

    /// Exclusive upper bound on quote length, in characters
    pub max_quote_len: usize,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the excluded edition marker.
    pub fn with_excluded_edition(mut self, edition: impl Into<String>) -> Self {
        self.excluded_edition = edition.into();
        self
    }

    /// Set the exclusive length band for quotes.
    pub fn with_quote_len(mut self, min: usize, max: usize) -> Self {
        self.min_quote_len = min;
        self.max_quote_len = max;
        self
    }

    /// Check whether a length falls strictly inside the quote band.
    pub fn accepts_len(&self, len: usize) -> bool {
        len > self.min_quote_len && len < self.max_quote_len
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            excluded_edition: DEFAULT_EXCLUDED_EDITION.to_string(),
            min_quote_len: DEFAULT_MIN_QUOTE_LEN,
            max_quote_len: DEFAULT_MAX_QUOTE_LEN,
        }
    }
}
