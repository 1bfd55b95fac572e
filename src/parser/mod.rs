//! Plaintext segmentation module.

mod options;
mod segmenter;

pub use options::{
    ExtractOptions, DEFAULT_EXCLUDED_EDITION, DEFAULT_LANGUAGE, DEFAULT_MAX_QUOTE_LEN,
    DEFAULT_MIN_QUOTE_LEN,
};
pub use segmenter::{normalize_line, segment, transition, Region, Transition};
