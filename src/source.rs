//! Download and viewer locations for a book.

/// Mirror used when none is configured.
pub const DEFAULT_MIRROR: &str = "https://aleph.pglaf.org";

/// Base of the public viewer pages.
pub const VIEWER_BASE: &str = "https://gutenberg.org/ebooks";

/// Directory path of a book on a mirror.
///
/// Every digit except the last becomes one path segment, so book `1342`
/// lives under `1/3/4`. Single-digit books live under `0`.
pub fn digit_path(id: u32) -> String {
    let digits = id.to_string();
    if digits.len() == 1 {
        return "0".to_string();
    }

    let prefix = &digits[..digits.len() - 1];
    prefix
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join("/")
}

/// Full download URL of a catalog file on a mirror.
pub fn book_url(mirror: &str, id: u32, filename: &str) -> String {
    let url = format!(
        "{}/{}/{}/{}",
        mirror.trim_end_matches('/'),
        digit_path(id),
        id,
        filename
    );
    log::debug!("book link: {}", url);
    url
}

/// Public viewer link for a book.
pub fn page_link(id: u32) -> String {
    format!("{}/{}", VIEWER_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_path() {
        assert_eq!(digit_path(5), "0");
        assert_eq!(digit_path(11), "1");
        assert_eq!(digit_path(1342), "1/3/4");
        assert_eq!(digit_path(60000), "6/0/0/0");
    }

    #[test]
    fn test_book_url() {
        assert_eq!(
            book_url(DEFAULT_MIRROR, 1342, "1342-0.txt"),
            "https://aleph.pglaf.org/1/3/4/1342/1342-0.txt"
        );
        assert_eq!(
            book_url("https://mirror.example/", 7, "7.txt"),
            "https://mirror.example/0/7/7.txt"
        );
    }

    #[test]
    fn test_page_link() {
        assert_eq!(page_link(2701), "https://gutenberg.org/ebooks/2701");
    }
}
