use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};
use rand::Rng;

use crate::configuration::config::Config;
use crate::error_handling::types::*;
use crate::filter_state::FilterState;
use crate::persistence::QuotePersistence;
use crate::quote_store::defaults::default_store;
use crate::quote_store::{CategoryFilter, Quote, QuoteStore, StoreStats};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::sync::{sync_with_server, QuoteSource};
use crate::transfer::{self, ImportReport};

/// What the front end should display after asking for a quote.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteView {
    Quote(Quote),
    /// The store itself is empty.
    NoQuotesAvailable,
    /// The store has quotes, but none in the selected category.
    NoQuotesInCategory(String),
}

pub struct Controller {
    pub config: Config,
    store: QuoteStore,
    persistence: QuotePersistence,
    filter: FilterState,
}

impl Controller {
    /// Opens the slots described by `config` and loads the saved quotes.
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        info!("Opening quote storage at {}", config.storage_path.display());
        let durable: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.storage_path)?);
        let session: Arc<dyn Storage> = match config.session_path() {
            Some(path) => Arc::new(FileStorage::new(path)?),
            None => {
                debug!("Session slots kept in process memory");
                Arc::new(MemoryStorage::new())
            }
        };
        Ok(Self::with_storage(config, durable, session))
    }

    /// Builds a controller over explicit durable and session backends.
    pub fn with_storage(
        config: Config,
        durable: Arc<dyn Storage>,
        session: Arc<dyn Storage>,
    ) -> Self {
        let persistence = QuotePersistence::new(durable, session.clone());
        let store = persistence.load();
        info!("{} quote(s) loaded", store.len());
        Self {
            config,
            store,
            persistence,
            filter: FilterState::new(session),
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Validates and appends a new quote, stamping it with the next id and
    /// the current time, then saves the store.
    pub fn add_quote(
        &mut self,
        text: &str,
        category: &str,
        author: Option<&str>,
    ) -> Result<Quote, ControllerError> {
        let mut quote = Quote::new(text, category);
        quote.author = author.map(str::to_string);
        quote.id = Some(self.store.next_id());
        quote.timestamp = Some(Utc::now().timestamp_millis());

        let added = self
            .store
            .add(quote)
            .map_err(|e| {
                warn!("Rejected new quote: {}", e);
                e
            })?
            .clone();
        self.persistence.save(&self.store)?;
        info!("Quote {} added to {:?}", added.id.unwrap_or_default(), added.category);
        Ok(added)
    }

    /// Picks a random quote from the current filter using the thread RNG.
    pub fn show_quote(&self) -> Result<QuoteView, ControllerError> {
        self.show_quote_with(&mut rand::rng())
    }

    pub fn show_quote_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuoteView, ControllerError> {
        if self.store.is_empty() {
            return Ok(QuoteView::NoQuotesAvailable);
        }
        let filter = self.filter();
        let subset = self.store.list_by_category(&filter);
        match QuoteStore::pick_random_with(&subset, rng) {
            Ok(quote) => {
                self.persistence.save_last_quote(quote)?;
                Ok(QuoteView::Quote(quote.clone()))
            }
            Err(QuoteError::EmptyCollection) => {
                debug!("No quotes in category {}", filter);
                Ok(QuoteView::NoQuotesInCategory(filter.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn last_quote(&self) -> Option<Quote> {
        self.persistence.last_quote()
    }

    /// Persists the filter parsed from `value` (`"all"` clears it).
    pub fn set_filter(&mut self, value: &str) -> Result<CategoryFilter, ControllerError> {
        let filter = CategoryFilter::parse(value);
        self.filter.set_filter(&filter)?;
        Ok(filter)
    }

    /// The saved filter, whether or not any quote matches it.
    pub fn filter(&self) -> CategoryFilter {
        self.filter.get_filter()
    }

    /// The saved filter if its category still exists, otherwise
    /// [`CategoryFilter::All`]. This is what a category picker should mark
    /// as selected.
    pub fn selected_category(&self) -> CategoryFilter {
        self.filter.restore(&self.store.categories())
    }

    /// Quotes in the current filter, in store order.
    pub fn list(&self) -> Vec<&Quote> {
        self.store.list_by_category(&self.filter())
    }

    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    pub async fn export<P: AsRef<Path>>(&self, path: P) -> Result<usize, ControllerError> {
        let written =
            transfer::export_to_path(&self.store, self.config.export_metadata, path).await?;
        Ok(written)
    }

    /// Merges an import file into the store and saves it.
    ///
    /// A rejected file leaves both the store and the saved quotes untouched.
    pub async fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportReport, ControllerError> {
        let report =
            transfer::import_from_path(&mut self.store, path, self.config.dedupe_imports).await?;
        if report.imported > 0 {
            self.persistence.save(&self.store)?;
        }
        Ok(report)
    }

    /// Appends the quotes served by `source` and saves the store.
    pub async fn sync<S: QuoteSource>(&mut self, source: &S) -> Result<usize, ControllerError> {
        let category = self.config.sync_category.clone();
        let added = sync_with_server(source, &mut self.store, &category).await?;
        self.persistence.save(&self.store)?;
        Ok(added)
    }

    /// Drops every quote and starts over from the built-in defaults.
    pub fn reset(&mut self) -> Result<(), ControllerError> {
        self.persistence.reset().map_err(|e| {
            error!("Unable to clear saved quotes: {}", e);
            e
        })?;
        self.store = default_store();
        self.persistence.save(&self.store)?;
        self.filter.set_filter(&CategoryFilter::All)?;
        info!("Store reset to {} default quote(s)", self.store.len());
        Ok(())
    }
}
