//! Core data models for the budget dashboard
//!
//! This module contains the data structures of the budgeting domain:
//! expenses, categories, money amounts and the overall budget state.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod state;

pub use category::Category;
pub use expense::{Expense, ExpenseDate, ExpenseDateError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use state::BudgetState;
