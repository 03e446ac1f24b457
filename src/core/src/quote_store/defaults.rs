use crate::quote_store::quote::Quote;
use crate::quote_store::store::QuoteStore;

const DEFAULT_QUOTES: &[(&str, &str)] = &[
    ("The only way to do great work is to love what you do.", "motivation"),
    ("Life is what happens to you while you're busy making other plans.", "life"),
    ("The future belongs to those who believe in the beauty of their dreams.", "dreams"),
    ("It is during our darkest moments that we must focus to see the light.", "inspiration"),
    ("The way to get started is to quit talking and begin doing.", "motivation"),
    ("Don't let yesterday take up too much of today.", "life"),
    ("You learn more from failure than from success. Don't let it stop you. Failure builds character.", "wisdom"),
    ("If you are working on something that you really care about, you don't have to be pushed. The vision pulls you.", "passion"),
    ("Innovation distinguishes between a leader and a follower.", "leadership"),
    ("Success is not final, failure is not fatal: it is the courage to continue that counts.", "perseverance"),
];

/// The built-in quotes loaded when no saved quotes exist.
pub fn default_quotes() -> Vec<Quote> {
    DEFAULT_QUOTES
        .iter()
        .map(|(text, category)| Quote::new(*text, *category))
        .collect()
}

pub fn default_store() -> QuoteStore {
    QuoteStore::from_quotes(default_quotes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_distinct() {
        let store = default_store();
        assert_eq!(store.len(), 10);
        assert!(store.iter().all(|q| q.clone().validated().is_ok()));
        assert_eq!(store.categories().len(), 8);
    }
}
