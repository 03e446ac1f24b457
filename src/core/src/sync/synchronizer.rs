use log::{error, info, warn};

use crate::error_handling::types::SyncError;
use crate::quote_store::{Quote, QuoteStore};
use crate::sync::source::QuoteSource;

/// Fetches posts from `source` and appends one quote per post title, filed
/// under `category`. Returns the number of quotes appended.
///
/// Posts with a blank title are skipped. On a failed fetch the store is left
/// untouched.
pub async fn sync_with_server<S: QuoteSource>(
    source: &S,
    store: &mut QuoteStore,
    category: &str,
) -> Result<usize, SyncError> {
    let posts = source.fetch_posts().await.map_err(|e| {
        error!("Server sync failed: {}", e);
        e
    })?;

    let mut added = 0;
    for post in posts {
        match store.add(Quote::new(post.title, category)) {
            Ok(_) => added += 1,
            Err(e) => warn!("Skipping server post {}: {}", post.id, e),
        }
    }
    info!("Synced with server, {} quote(s) added", added);
    Ok(added)
}
