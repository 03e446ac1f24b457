/// Durable slot holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";

/// Session slot holding the selected category filter.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Session slot holding the JSON of the last quote shown.
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// Returns true when `key` can be used as a slot name.
///
/// Slot names end up as file names in the directory backend, so they are
/// restricted to ASCII alphanumerics, `_` and `-`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_keys_are_valid() {
        assert!(is_valid_key(QUOTES_KEY));
        assert!(is_valid_key(SELECTED_CATEGORY_KEY));
        assert!(is_valid_key(LAST_QUOTE_KEY));
    }

    #[test]
    fn path_like_keys_are_rejected() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../quotes"));
        assert!(!is_valid_key("a/b"));
        assert!(!is_valid_key("quotes.json"));
    }
}
