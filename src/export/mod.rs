//! Export module for spendcmp
//!
//! Machine-readable output in two formats:
//! - CSV: per-dataset and combined rows (spreadsheet-compatible)
//! - JSON: the full comparison document with schema versioning

pub mod csv;
pub mod json;

pub use csv::{export_combined_csv, export_tables_csv};
pub use json::{export_json, ComparisonExport, EXPORT_SCHEMA_VERSION};
