//! Composition root.
//!
//! [`Controller`] owns the quote store, its persistence, the filter state and
//! the configuration. Front ends only talk to the controller: they read
//! snapshots from it and hand it intents (add, filter, import, export, sync).

pub mod controller_handler;

pub use controller_handler::{Controller, QuoteView};
