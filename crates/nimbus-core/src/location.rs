//! Location normalization.
//!
//! The same normalization must be applied on the cache write and read paths,
//! or lookups silently miss. Every cache key goes through this function.

/// Normalizes a free-text location for use as a cache key segment.
///
/// Trims surrounding whitespace, lowercases, and collapses internal runs of
/// whitespace to a single space.
#[must_use]
pub fn normalize_location(location: &str) -> String {
    location
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_location("Seattle"), "seattle");
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize_location("  New   York "), "new york");
        assert_eq!(normalize_location("new york"), "new york");
    }

    #[test]
    fn test_blank_normalizes_to_empty() {
        assert_eq!(normalize_location("   "), "");
    }
}
