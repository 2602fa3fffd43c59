//! Budget Dashboard - personal monthly budget tracker
//!
//! This library provides the core of the budget dashboard: a total budget,
//! expenses recorded against nine fixed categories, the figures derived from
//! them, and a paginated report of the current state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses and the budget state
//! - `storage`: Persistence of the budget and the expense list
//! - `services`: The expense store and aggregate computations
//! - `display`: Terminal formatting for the CLI
//! - `reports`: The exportable budget report
//! - `export`: CSV, JSON and YAML export and backup restore
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_dashboard::config::BudgetPaths;
//! use budget_dashboard::services::ExpenseStore;
//! use budget_dashboard::storage::FileStorage;
//!
//! let paths = BudgetPaths::new()?;
//! let mut store = ExpenseStore::open(FileStorage::new(&paths)?);
//! store.add_funds(Money::from_rupees(5000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
