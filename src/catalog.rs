//! Catalog of downloadable book files.
//!
//! The catalog is a plain list of filenames as they appear on the
//! Gutenberg mirror, one per line:
//!
//! ```text
//! 11.txt
//! 1342-0.txt
//! 2701.txt
//! ```

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};
use crate::patterns::BOOK_ID_RE;

/// A catalog entry resolved to its book number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Numeric book identifier
    pub id: u32,

    /// Filename on the mirror (e.g. `1342-0.txt`)
    pub filename: String,
}

/// In-memory catalog of book filenames.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// Parse a newline-delimited catalog.
    ///
    /// Blank lines are skipped, and so are lines that do not start with a
    /// book number (headings, stray notes), since no book could be fetched
    /// for them.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| {
                let numbered = book_id(line).is_ok();
                if !numbered {
                    log::debug!("skipping catalog line without a book number: {}", line);
                }
                numbered
            })
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Load a catalog from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let catalog = Self::parse(&text);
        log::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over raw filenames.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Find the file for a book number.
    ///
    /// Both the ASCII (`<id>.txt`) and the UTF-8 (`<id>-0.txt`) spellings
    /// match; the first one listed wins.
    pub fn find(&self, id: u32) -> Result<CatalogEntry> {
        let plain = format!("{}.txt", id);
        let utf8 = format!("{}-0.txt", id);

        self.entries
            .iter()
            .find(|entry| **entry == plain || **entry == utf8)
            .map(|filename| CatalogEntry {
                id,
                filename: filename.clone(),
            })
            .ok_or(Error::BookNotFound(id))
    }

    /// Pick an entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CatalogEntry> {
        if self.entries.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let filename = &self.entries[rng.gen_range(0..self.entries.len())];
        Ok(CatalogEntry {
            id: book_id(filename)?,
            filename: filename.clone(),
        })
    }
}

/// Read the book number from the leading digits of a catalog filename.
pub fn book_id(filename: &str) -> Result<u32> {
    BOOK_ID_RE
        .captures(filename)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| Error::InvalidCatalogEntry(filename.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_skips_blank_lines() {
        let catalog = Catalog::parse("11.txt\n\n  1342-0.txt  \n\r\n2701.txt\n");
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.filenames().collect::<Vec<_>>(),
            vec!["11.txt", "1342-0.txt", "2701.txt"]
        );
    }

    #[test]
    fn test_parse_skips_unnumbered_lines() {
        let catalog = Catalog::parse("README\n2701.txt\nindex.html\n");
        assert_eq!(catalog.filenames().collect::<Vec<_>>(), vec!["2701.txt"]);
        assert!(Catalog::parse("README\nnotes\n").is_empty());
    }

    #[test]
    fn test_find_both_spellings() {
        let catalog = Catalog::parse("11.txt\n1342-0.txt\n");
        assert_eq!(catalog.find(11).unwrap().filename, "11.txt");
        assert_eq!(catalog.find(1342).unwrap().filename, "1342-0.txt");
    }

    #[test]
    fn test_find_is_exact() {
        // 134.txt must not match a request for book 13
        let catalog = Catalog::parse("134.txt\n13-8.txt\n");
        assert!(matches!(catalog.find(13), Err(Error::BookNotFound(13))));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Catalog::default().choose(&mut rng);
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_choose_resolves_id() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::parse("2701.txt\n");
        let entry = catalog.choose(&mut rng).unwrap();
        assert_eq!(entry.id, 2701);
        assert_eq!(entry.filename, "2701.txt");
    }

    #[test]
    fn test_book_id() {
        assert_eq!(book_id("1342-0.txt").unwrap(), 1342);
        assert_eq!(book_id("5.txt").unwrap(), 5);
        assert!(matches!(
            book_id("README"),
            Err(Error::InvalidCatalogEntry(_))
        ));
    }
}
