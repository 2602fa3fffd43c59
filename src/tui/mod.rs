//! Terminal User Interface module
//!
//! An interactive dashboard built on ratatui: summary cards, a category
//! chart and the expense ledger, with dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
