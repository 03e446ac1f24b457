use std::collections::HashSet;

use log::{debug, trace, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error_handling::types::QuoteError;
use crate::quote_store::quote::{CategoryFilter, Quote};

/// Summary counts shown alongside the quote display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total_quotes: usize,
    pub total_categories: usize,
}

/// Ordered, append-only collection of quotes.
///
/// Insertion order is iteration order. Quotes are never edited once stored;
/// they go away only when the whole store is replaced by a reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from saved quotes, validating each one. Quotes with a
    /// blank `text` or `category` are dropped.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        let total = quotes.len();
        let quotes: Vec<Quote> = quotes
            .into_iter()
            .filter_map(|q| q.validated().ok())
            .collect();
        if quotes.len() < total {
            warn!("Dropped {} invalid quote(s) out of {}", total - quotes.len(), total);
        }
        Self { quotes }
    }

    /// Validates `quote` and appends it.
    ///
    /// Fails with [`QuoteError::Validation`] when `text` or `category` is
    /// blank after trimming; the store is left untouched in that case.
    pub fn add(&mut self, quote: Quote) -> Result<&Quote, QuoteError> {
        let quote = quote.validated()?;
        debug!("Adding quote in category {:?}", quote.category);
        self.quotes.push(quote);
        let index = self.quotes.len() - 1;
        Ok(&self.quotes[index])
    }

    /// All quotes accepted by `filter`, in store order.
    pub fn list_by_category(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        let subset: Vec<&Quote> = self.quotes.iter().filter(|q| filter.matches(q)).collect();
        trace!("Filter {} matched {} of {} quote(s)", filter, subset.len(), self.quotes.len());
        subset
    }

    /// Picks one quote uniformly at random from `subset` using the thread RNG.
    pub fn pick_random<'a>(subset: &[&'a Quote]) -> Result<&'a Quote, QuoteError> {
        Self::pick_random_with(subset, &mut rand::rng())
    }

    /// Picks one quote uniformly at random from `subset` using `rng`.
    ///
    /// Fails with [`QuoteError::EmptyCollection`] when `subset` is empty.
    pub fn pick_random_with<'a, R: Rng + ?Sized>(
        subset: &[&'a Quote],
        rng: &mut R,
    ) -> Result<&'a Quote, QuoteError> {
        subset.choose(rng).copied().ok_or(QuoteError::EmptyCollection)
    }

    /// Distinct categories in first-seen order.
    ///
    /// Categories differing only in case count once, under the spelling that
    /// appeared first.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut categories = Vec::new();
        for quote in &self.quotes {
            let key = quote.category.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                categories.push(quote.category.clone());
            }
        }
        categories
    }

    /// Normalized text of every stored quote, for duplicate checks.
    pub fn normalized_texts(&self) -> HashSet<String> {
        self.quotes.iter().map(Quote::normalized_text).collect()
    }

    /// The id one past the largest id in use, starting at 1.
    pub fn next_id(&self) -> u64 {
        self.quotes
            .iter()
            .filter_map(|q| q.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_quotes: self.quotes.len(),
            total_categories: self.categories().len(),
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl<'a> IntoIterator for &'a QuoteStore {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_store() -> QuoteStore {
        let mut store = QuoteStore::new();
        store.add(Quote::new("Q1", "Life")).unwrap();
        store.add(Quote::new("Q2", "Humor")).unwrap();
        store.add(Quote::new("Q3", "life")).unwrap();
        store
    }

    #[test]
    fn add_appends_and_registers_category() {
        let mut store = sample_store();
        let before = store.len();
        store.add(Quote::new("Q4", "Wisdom")).unwrap();
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.quotes().last().unwrap().text, "Q4");
        assert!(store.categories().contains(&"Wisdom".to_string()));
    }

    #[test]
    fn add_rejects_blank_fields_without_side_effects() {
        let mut store = sample_store();
        let snapshot = store.clone();
        assert_eq!(
            store.add(Quote::new("", "Life")).unwrap_err(),
            QuoteError::Validation("text".into())
        );
        assert_eq!(
            store.add(Quote::new("Q9", "  ")).unwrap_err(),
            QuoteError::Validation("category".into())
        );
        assert_eq!(store, snapshot);
    }

    #[test]
    fn list_by_category_is_case_insensitive_and_ordered() {
        let store = sample_store();
        let life: Vec<&str> = store
            .list_by_category(&CategoryFilter::parse("LIFE"))
            .iter()
            .map(|q| q.text.as_str())
            .collect();
        assert_eq!(life, vec!["Q1", "Q3"]);
        assert_eq!(store.list_by_category(&CategoryFilter::All).len(), 3);
    }

    #[test]
    fn list_by_unknown_category_is_empty() {
        let store = sample_store();
        assert!(store
            .list_by_category(&CategoryFilter::parse("Nonexistent"))
            .is_empty());
    }

    #[test]
    fn pick_random_returns_member_of_subset() {
        let store = sample_store();
        let subset = store.list_by_category(&CategoryFilter::parse("life"));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = QuoteStore::pick_random_with(&subset, &mut rng).unwrap();
            assert!(subset.iter().any(|q| std::ptr::eq(*q, picked)));
        }
    }

    #[test]
    fn pick_random_covers_every_member() {
        let store = sample_store();
        let subset = store.list_by_category(&CategoryFilter::All);
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = [false; 3];
        for _ in 0..200 {
            let picked = QuoteStore::pick_random_with(&subset, &mut rng).unwrap();
            let idx = store.iter().position(|q| q == picked).unwrap();
            hits[idx] = true;
        }
        assert_eq!(hits, [true, true, true]);
    }

    #[test]
    fn pick_random_on_empty_subset_reports_empty_collection() {
        assert_eq!(
            QuoteStore::pick_random(&[]).unwrap_err(),
            QuoteError::EmptyCollection
        );
    }

    #[test]
    fn categories_keep_first_seen_spelling() {
        let store = sample_store();
        assert_eq!(store.categories(), vec!["Life".to_string(), "Humor".to_string()]);
    }

    #[test]
    fn stats_and_ids() {
        let mut store = sample_store();
        assert_eq!(
            store.stats(),
            StoreStats {
                total_quotes: 3,
                total_categories: 2
            }
        );
        assert_eq!(store.next_id(), 1);
        let mut quote = Quote::new("Q5", "Life");
        quote.id = Some(41);
        store.add(quote).unwrap();
        assert_eq!(store.next_id(), 42);
    }

    #[test]
    fn normalized_texts_collapse_case_and_spacing() {
        let mut store = sample_store();
        store.add(Quote::new("  Two   words ", "Life")).unwrap();
        let texts = store.normalized_texts();
        assert!(texts.contains("q1"));
        assert!(texts.contains("two words"));
        assert!(!texts.contains("Q1"));
    }

    #[test]
    fn from_quotes_drops_blank_entries() {
        let store = QuoteStore::from_quotes(vec![
            Quote::new("", "  "),
            Quote::new(" Kept ", "Life"),
            Quote::new("No category", ""),
        ]);
        assert_eq!(store.quotes(), &[Quote::new("Kept", "Life")][..]);
        assert_eq!(store.categories(), vec!["Life".to_string()]);
    }
}
