//! Budget state
//!
//! The total budget and the expense collection. The two fields are persisted
//! and loaded independently of each other.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Everything the dashboard knows: the budget and the expenses in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Monthly budget, never negative
    pub total_budget: Money,

    /// Expenses in the order they were added
    pub expenses: Vec<Expense>,
}

impl BudgetState {
    pub fn new(total_budget: Money, expenses: Vec<Expense>) -> Self {
        Self {
            total_budget,
            expenses,
        }
    }

    /// Look up an expense by exact id
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.total_budget.is_zero() && self.expenses.is_empty()
    }
}
