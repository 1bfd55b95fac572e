//! Plain text rendering for quote cards.

use crate::model::QuoteCard;

/// Render a card for the terminal.
///
/// ```text
///
/// title: Moby Dick
/// author: Herman Melville
///
/// "Call me Ishmael." https://gutenberg.org/ebooks/2701
/// ```
pub fn to_text(card: &QuoteCard) -> String {
    format!(
        "\ntitle: {}\nauthor: {}\n\n{}\n",
        card.title,
        card.author,
        status_text(card)
    )
}

/// Text of a social-media status: the quote followed by the viewer link.
pub fn status_text(card: &QuoteCard) -> String {
    format!("{} {}", card.quote, card.link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let card = QuoteCard {
            book_id: 11,
            title: "Alice".to_string(),
            author: "Lewis Carroll".to_string(),
            quote: "\"Curiouser!\"".to_string(),
            link: "https://gutenberg.org/ebooks/11".to_string(),
        };

        let text = to_text(&card);
        assert_eq!(
            text,
            "\ntitle: Alice\nauthor: Lewis Carroll\n\n\"Curiouser!\" https://gutenberg.org/ebooks/11\n"
        );
        assert_eq!(
            status_text(&card),
            "\"Curiouser!\" https://gutenberg.org/ebooks/11"
        );
    }
}
