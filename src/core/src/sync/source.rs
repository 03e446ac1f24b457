use std::future::Future;

use serde::Deserialize;

use crate::error_handling::types::SyncError;

/// A post as returned by the placeholder posts API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerPost {
    #[serde(default)]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Where synced quotes come from.
///
/// A fetch is issued once per sync; it is neither cancelled nor retried.
pub trait QuoteSource {
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<ServerPost>, SyncError>> + Send;
}
