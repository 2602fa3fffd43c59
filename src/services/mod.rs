//! Service layer for the budget dashboard
//!
//! The service layer provides the expense store (validation and mutation with
//! write-through persistence) and the aggregation functions derived from it.

pub mod aggregation;
pub mod expense;

pub use aggregation::{BudgetSummary, CategoryTotal};
pub use expense::{CreateExpenseInput, ExpenseStore};
