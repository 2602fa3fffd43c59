//! Display formatting for terminal output
//!
//! Provides utilities for formatting the budget state for terminal display:
//! currency and date strings, the expense ledger, and the summary views.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::{format_expense_details, format_expense_ledger};
pub use format::{format_currency, format_date, format_report_date};
pub use summary::{format_category_breakdown, format_category_list, format_summary};
