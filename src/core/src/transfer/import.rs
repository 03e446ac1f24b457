use std::path::Path;

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::error_handling::types::TransferError;
use crate::quote_store::quote::normalize_text;
use crate::quote_store::{Quote, QuoteStore};
use crate::transfer::types::ImportReport;

/// Parses an import file into valid quotes.
///
/// The file must be a JSON array of quotes or an object whose `quotes` field
/// is such an array. Entries that are not objects, or whose `text` or
/// `category` is missing, not a string, or blank, are dropped; the second
/// element of the result counts them.
pub fn parse_import(bytes: &[u8]) -> Result<(Vec<Quote>, usize), TransferError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        error!("Import file is not valid JSON: {}", e);
        TransferError::InvalidJson(e.to_string())
    })?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("quotes") {
            Some(Value::Array(entries)) => entries,
            _ => {
                error!("Import object has no `quotes` array");
                return Err(TransferError::UnsupportedFormat);
            }
        },
        _ => {
            error!("Import file is neither an array nor an object");
            return Err(TransferError::UnsupportedFormat);
        }
    };

    let total = entries.len();
    let quotes: Vec<Quote> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match parse_entry(entry) {
            Some(quote) => Some(quote),
            None => {
                debug!("Skipping malformed import entry #{}", index);
                None
            }
        })
        .collect();
    let malformed = total - quotes.len();
    if malformed > 0 {
        warn!("Skipped {} malformed entries out of {}", malformed, total);
    }
    Ok((quotes, malformed))
}

fn parse_entry(entry: Value) -> Option<Quote> {
    if !entry.is_object() {
        return None;
    }
    serde_json::from_value::<Quote>(entry).ok()?.validated().ok()
}

/// Parses `bytes` and appends the valid quotes to `store`.
///
/// With `dedupe` set, a quote is skipped when its normalized text matches a
/// quote already in the store, including ones added earlier from the same
/// file. If the file cannot be parsed the store is left untouched.
pub fn import_bytes(
    store: &mut QuoteStore,
    bytes: &[u8],
    dedupe: bool,
) -> Result<ImportReport, TransferError> {
    let (quotes, malformed) = parse_import(bytes)?;
    let mut report = ImportReport {
        malformed,
        ..Default::default()
    };

    let mut seen = if dedupe {
        store.normalized_texts()
    } else {
        Default::default()
    };
    for quote in quotes {
        if dedupe && !seen.insert(normalize_text(&quote.text)) {
            debug!("Skipping duplicate quote {:?}", quote.text);
            report.duplicates += 1;
            continue;
        }
        match store.add(quote) {
            Ok(_) => report.imported += 1,
            Err(_) => report.malformed += 1,
        }
    }

    info!(
        "Imported {} quote(s), skipped {} malformed and {} duplicate(s)",
        report.imported, report.malformed, report.duplicates
    );
    Ok(report)
}

/// Reads `path` and merges it with [`import_bytes`].
pub async fn import_from_path<P: AsRef<Path>>(
    store: &mut QuoteStore,
    path: P,
    dedupe: bool,
) -> Result<ImportReport, TransferError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        error!("Failed to read import file {}: {}", path.display(), e);
        TransferError::IoError(e)
    })?;
    debug!("Read {} byte(s) from {}", bytes.len(), path.display());
    import_bytes(store, &bytes, dedupe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_q1() -> QuoteStore {
        let mut store = QuoteStore::new();
        store.add(Quote::new("Q1", "C1")).unwrap();
        store
    }

    #[test]
    fn accepts_bare_array() {
        let (quotes, malformed) =
            parse_import(br#"[{"text":"Q1","category":"C1"},{"text":"Q2","category":"C2","author":"A"}]"#)
                .unwrap();
        assert_eq!(malformed, 0);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].author.as_deref(), Some("A"));
    }

    #[test]
    fn accepts_wrapped_document() {
        let (quotes, _) = parse_import(
            br#"{"quotes":[{"text":"Q1","category":"C1"}],"exportDate":"2024-03-01T12:00:00Z","version":"1.0"}"#,
        )
        .unwrap();
        assert_eq!(quotes, vec![Quote::new("Q1", "C1")]);
    }

    #[test]
    fn filters_malformed_entries() {
        let (quotes, malformed) = parse_import(
            br#"[{"text":"Q1","category":"C1"},{"text":"no category"},{"text":"  ","category":"C1"},{"text":5,"category":"C1"},"just a string",null]"#,
        )
        .unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(malformed, 5);
    }

    #[test]
    fn rejects_invalid_json_and_other_shapes() {
        assert!(matches!(parse_import(b"{oops"), Err(TransferError::InvalidJson(_))));
        assert!(matches!(parse_import(b"42"), Err(TransferError::UnsupportedFormat)));
        assert!(matches!(
            parse_import(br#"{"items":[]}"#),
            Err(TransferError::UnsupportedFormat)
        ));
        assert!(matches!(
            parse_import(br#"{"quotes":"nope"}"#),
            Err(TransferError::UnsupportedFormat)
        ));
    }

    #[test]
    fn dedupe_skips_existing_text() {
        let mut store = store_with_q1();
        let report = import_bytes(&mut store, br#"[{"text":"Q1","category":"C1"}]"#, true).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            report,
            ImportReport {
                imported: 0,
                malformed: 0,
                duplicates: 1
            }
        );
    }

    #[test]
    fn dedupe_uses_normalized_text_within_batch() {
        let mut store = store_with_q1();
        let report = import_bytes(
            &mut store,
            br#"[{"text":"Q2","category":"C2"},{"text":"  q2 ","category":"C3"},{"text":"q1","category":"C9"}]"#,
            true,
        )
        .unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.duplicates, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn without_dedupe_duplicates_are_appended() {
        let mut store = store_with_q1();
        let report = import_bytes(&mut store, br#"[{"text":"Q1","category":"C1"}]"#, false).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn dedupe_keeps_large_batches_linear() {
        let mut json = String::from("[");
        for i in 0..20_000 {
            if i > 0 {
                json.push(',');
            }
            json.push_str(&format!(r#"{{"text":"Quote number {}","category":"Bulk"}}"#, i % 10_000));
        }
        json.push(']');

        let mut store = QuoteStore::new();
        let started = std::time::Instant::now();
        let report = import_bytes(&mut store, json.as_bytes(), true).unwrap();
        assert_eq!(report.imported, 10_000);
        assert_eq!(report.duplicates, 10_000);
        assert_eq!(store.len(), 10_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(30));
    }

    #[test]
    fn failed_import_leaves_store_unchanged() {
        let mut store = store_with_q1();
        let before = store.clone();
        assert!(import_bytes(&mut store, b"not json at all", true).is_err());
        assert_eq!(store, before);
    }

    #[tokio::test]
    async fn import_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("import.json");
        std::fs::write(&path, r#"[{"text":"From disk","category":"Files"}]"#).unwrap();

        let mut store = QuoteStore::new();
        let report = import_from_path(&mut store, &path, true).await.unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(store.quotes()[0].text, "From disk");
    }

    #[tokio::test]
    async fn import_from_missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut store = QuoteStore::new();
        let result = import_from_path(&mut store, dir.path().join("missing.json"), true).await;
        assert!(matches!(result, Err(TransferError::IoError(_))));
    }
}
