//! Simulated server sync.
//!
//! A [`QuoteSource`] hands back posts from "the server"; the synchronizer
//! turns each post title into a quote and appends it to the store. There is
//! no conflict resolution: synced quotes are simply concatenated.

pub mod mock_server;
pub mod source;
pub mod synchronizer;

pub use mock_server::MockServer;
pub use source::{QuoteSource, ServerPost};
pub use synchronizer::sync_with_server;
