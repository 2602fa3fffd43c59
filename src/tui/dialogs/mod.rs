//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding expenses, entering amounts and confirming
//! destructive actions

pub mod amount;
pub mod confirm;
pub mod expense;
pub mod help;
