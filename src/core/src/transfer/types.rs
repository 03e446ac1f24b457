use serde::Serialize;

use crate::quote_store::Quote;

pub const EXPORT_VERSION: &str = "1.0";

/// Export file wrapped with metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub quotes: Vec<Quote>,
    /// RFC 3339 timestamp of the export.
    pub export_date: String,
    pub version: String,
    pub count: usize,
}

/// Outcome of merging an import file into the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub malformed: usize,
    pub duplicates: usize,
}

impl ImportReport {
    pub fn skipped(&self) -> usize {
        self.malformed + self.duplicates
    }
}
