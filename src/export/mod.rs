//! Export module for the budget dashboard
//!
//! Provides data export in multiple formats:
//! - CSV: the expense ledger and category totals (spreadsheet-compatible)
//! - JSON: machine-readable full backup
//! - YAML: human-readable full backup

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_category_totals_csv, export_expenses_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
