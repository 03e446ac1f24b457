//! Quote store core module.
//!
//! This module holds the quote record, the category filter, and the ordered
//! in-memory store that every other subsystem reads from or writes to.
//!
//! Category comparison is case-insensitive everywhere in this crate; the
//! spelling reported by [`QuoteStore::categories`] is the first one seen.

/// Built-in quote set used when nothing has been persisted yet.
pub mod defaults;
/// Quote record, category filter, and text normalization.
pub mod quote;
/// Ordered quote collection.
pub mod store;

pub use quote::{normalize_text, CategoryFilter, Quote};
pub use store::{QuoteStore, StoreStats};
