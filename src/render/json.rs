//! JSON rendering for quote cards.

use crate::error::{Error, Result};
use crate::model::QuoteCard;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a quote card to JSON.
pub fn to_json(card: &QuoteCard, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(card),
        JsonFormat::Compact => serde_json::to_string(card),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> QuoteCard {
        QuoteCard {
            book_id: 2701,
            title: "Moby Dick".to_string(),
            author: "Herman Melville".to_string(),
            quote: "\"Call me Ishmael.\" ".to_string(),
            link: "https://gutenberg.org/ebooks/2701".to_string(),
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&card(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Moby Dick"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&card(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let parsed: QuoteCard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, card());
    }
}
