pub mod configuration;
pub use configuration::{Config, ConfigOverrides};

pub mod controller;
pub use controller::{Controller, QuoteView};

pub mod error_handling;

pub mod filter_state;
pub use filter_state::FilterState;

pub mod persistence;
pub use persistence::QuotePersistence;

pub mod quote_store;
pub use quote_store::{CategoryFilter, Quote, QuoteStore, StoreStats};

pub mod storage;

pub mod sync;

pub mod transfer;
