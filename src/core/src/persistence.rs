//! Quote persistence over key-value slots.
//!
//! [`QuotePersistence`] writes the whole store as one JSON array to the
//! durable `quotes` slot and remembers the last quote shown in the session
//! `lastQuote` slot. Reading never fails: a missing or unreadable `quotes`
//! slot yields the built-in default quotes.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::error_handling::types::StorageError;
use crate::quote_store::defaults::default_store;
use crate::quote_store::{Quote, QuoteStore};
use crate::storage::types::{LAST_QUOTE_KEY, QUOTES_KEY};
use crate::storage::Storage;

pub struct QuotePersistence {
    durable: Arc<dyn Storage>,
    session: Arc<dyn Storage>,
}

impl QuotePersistence {
    pub fn new(durable: Arc<dyn Storage>, session: Arc<dyn Storage>) -> Self {
        Self { durable, session }
    }

    /// Serializes every quote, in order, to the `quotes` slot.
    pub fn save(&self, store: &QuoteStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(store.quotes())
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.durable.set_item(QUOTES_KEY, &json)?;
        debug!("Saved {} quote(s)", store.len());
        Ok(())
    }

    /// Reads the `quotes` slot, falling back to the default quotes when the
    /// slot is missing, unreadable or not a JSON array of quotes. Saved
    /// quotes with a blank `text` or `category` are dropped.
    pub fn load(&self) -> QuoteStore {
        let raw = match self.durable.get_item(QUOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved quotes, using the default set");
                return default_store();
            }
            Err(e) => {
                warn!("Unable to read saved quotes ({}), using the default set", e);
                return default_store();
            }
        };
        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) => {
                debug!("Loaded {} saved quote(s)", quotes.len());
                QuoteStore::from_quotes(quotes)
            }
            Err(e) => {
                warn!("Saved quotes are malformed ({}), using the default set", e);
                default_store()
            }
        }
    }

    /// Removes the `quotes` slot so the next load starts from the defaults.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.durable.remove_item(QUOTES_KEY)
    }

    pub fn save_last_quote(&self, quote: &Quote) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(quote).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.session.set_item(LAST_QUOTE_KEY, &json)
    }

    /// The last quote shown in this session, if it can still be read.
    pub fn last_quote(&self) -> Option<Quote> {
        let raw = match self.session.get_item(LAST_QUOTE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Unable to read last quote: {}", e);
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| warn!("Last quote is malformed: {}", e))
            .ok()
    }
}
