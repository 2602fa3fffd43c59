//! Reports module for the budget dashboard
//!
//! Provides the exportable budget report: summary figures, category
//! breakdown and the most recent expenses, paginated.

pub mod budget_report;

pub use budget_report::{BudgetReport, ReportPage, TextBlock};
