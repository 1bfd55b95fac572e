//! Document-level types.

use serde::{Deserialize, Serialize};

/// A plaintext ebook split into its three regions.
///
/// Every normalized line lands in exactly one section and keeps its
/// original relative order. Sentinel lines are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    /// Lines before the start-of-text sentinel (license preamble and metadata)
    pub header: Vec<String>,

    /// Lines between the start and end sentinels
    pub body: Vec<String>,

    /// Lines after the end-of-text sentinel
    pub footer: Vec<String>,
}

impl Sections {
    /// Create empty sections.
    pub fn new() -> Self {
        Self::default()
    }
}
