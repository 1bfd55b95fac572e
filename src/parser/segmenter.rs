//! Header/body/footer segmentation of Project Gutenberg plaintext.
//!
//! A Gutenberg file wraps the licensed text in two sentinel lines:
//!
//! ```text
//! Title: Moby Dick            <- header
//! *** START OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***
//! Call me Ishmael. ...        <- body
//! *** END OF THE PROJECT GUTENBERG EBOOK MOBY DICK ***
//! Updated editions will ...   <- footer
//! ```
//!
//! Older releases spell the sentinels `START OF THIS PROJECT` and
//! `END OF THIS PROJECT`; both spellings mark the same boundary.

use crate::model::Sections;
use crate::patterns::WHITESPACE_RUN_RE;

const HEADER_END_MARKERS: [&str; 2] = ["START OF THE PROJECT", "START OF THIS PROJECT"];
const FOOTER_START_MARKERS: [&str; 2] = ["END OF THE PROJECT", "END OF THIS PROJECT"];

/// Region of the document a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Region {
    /// Metadata and license preamble
    #[default]
    Header,
    /// The book text itself
    Body,
    /// Trailing license text
    Footer,
}

/// What the segmenter does with a single raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Normalize the line and store it in the given region
    Emit(Region),
    /// Drop the line (sentinels)
    Discard,
}

/// Compute the next region and the action for one raw line.
///
/// Regions only move forward: a start sentinel moves `Header` to `Body`
/// and an end sentinel moves `Body` to `Footer`. A sentinel seen in any
/// other region leaves the region unchanged. Sentinels are always
/// discarded.
pub fn transition(current: Region, line: &str) -> (Region, Transition) {
    if HEADER_END_MARKERS.iter().any(|m| line.contains(m)) {
        let next = match current {
            Region::Header => Region::Body,
            other => other,
        };
        return (next, Transition::Discard);
    }

    if FOOTER_START_MARKERS.iter().any(|m| line.contains(m)) {
        let next = match current {
            Region::Body => Region::Footer,
            other => other,
        };
        return (next, Transition::Discard);
    }

    (current, Transition::Emit(current))
}

/// Normalize whitespace on a single line.
///
/// Runs of two or more ASCII whitespace characters collapse to a single space,
/// then leading and trailing spaces are trimmed. Applying it twice gives
/// the same result as applying it once.
pub fn normalize_line(line: &str) -> String {
    let collapsed = WHITESPACE_RUN_RE.replace_all(line, " ");
    collapsed.trim_matches(' ').to_string()
}

/// Split a raw document into header, body and footer sections.
///
/// This never fails. A document without a start sentinel is all header;
/// one without an end sentinel has an empty footer.
pub fn segment(document: &str) -> Sections {
    let mut sections = Sections::new();
    let mut region = Region::Header;

    for raw in document.lines() {
        let (next, action) = transition(region, raw);
        region = next;

        if let Transition::Emit(target) = action {
            let line = normalize_line(raw);
            match target {
                Region::Header => sections.header.push(line),
                Region::Body => sections.body.push(line),
                Region::Footer => sections.footer.push(line),
            }
        }
    }

    sections
}
