use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

use crate::error_handling::types::TransferError;
use crate::quote_store::QuoteStore;
use crate::transfer::types::{ExportDocument, EXPORT_VERSION};

/// Pretty-printed JSON for `store`, stamped with the current time when
/// `with_metadata` is set.
pub fn export_document(store: &QuoteStore, with_metadata: bool) -> Result<String, TransferError> {
    export_document_at(store, with_metadata, Utc::now())
}

pub fn export_document_at(
    store: &QuoteStore,
    with_metadata: bool,
    exported_at: DateTime<Utc>,
) -> Result<String, TransferError> {
    let json = if with_metadata {
        let document = ExportDocument {
            quotes: store.quotes().to_vec(),
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
            count: store.len(),
        };
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string_pretty(store.quotes())
    };
    json.map_err(|e| TransferError::Serialization(e.to_string()))
}

/// Writes the export document to `path` and returns the number of quotes
/// written.
pub async fn export_to_path<P: AsRef<Path>>(
    store: &QuoteStore,
    with_metadata: bool,
    path: P,
) -> Result<usize, TransferError> {
    let path = path.as_ref();
    let json = export_document(store, with_metadata)?;
    tokio::fs::write(path, json).await?;
    info!("Exported {} quote(s) to {}", store.len(), path.display());
    Ok(store.len())
}
