//! JSON import and export of quote files.
//!
//! Export produces either a bare array of quotes or an [`ExportDocument`]
//! carrying the export date, format version and count. Import accepts both
//! shapes, skips malformed entries and, when asked to, entries whose
//! normalized text is already present.

pub mod export;
pub mod import;
pub mod types;

pub use export::{export_document, export_to_path};
pub use import::{import_bytes, import_from_path, parse_import};
pub use types::{ExportDocument, ImportReport, EXPORT_VERSION};
