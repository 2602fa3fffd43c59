//! Expense store
//!
//! The single source of truth for the budget and the expenses. Every mutation
//! writes the changed field through the persistence layer before returning.
//! A failed write is logged and otherwise ignored: the in-memory state stays
//! correct and the next successful write catches storage up.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Category, Expense, ExpenseDate, ExpenseId, Money};
use crate::storage::Persistence;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Category name as entered; must be one of the fixed set
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
    pub date: ExpenseDate,
}

/// Owns the budget state and keeps storage in step with it
pub struct ExpenseStore<P: Persistence> {
    state: BudgetState,
    persistence: P,
}

impl<P: Persistence> ExpenseStore<P> {
    /// Load both fields from storage, each defaulting independently
    pub fn open(persistence: P) -> Self {
        let state = BudgetState::new(persistence.load_budget(), persistence.load_expenses());
        info!(
            budget = %state.total_budget,
            expenses = state.expenses.len(),
            "budget state loaded"
        );
        Self { state, persistence }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn total_budget(&self) -> Money {
        self.state.total_budget
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Find an expense by exact id
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.state.find(id)
    }

    /// Resolve a full id or a unique id prefix to an expense id
    pub fn resolve_id(&self, identifier: &str) -> BudgetResult<ExpenseId> {
        let identifier = identifier.trim();
        if let Some(expense) = self.state.expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(expense.id.clone());
        }

        let mut matches = self
            .state
            .expenses
            .iter()
            .filter(|e| e.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id.clone()),
            (Some(_), Some(_)) => Err(BudgetError::Validation(format!(
                "Expense id '{}' is ambiguous; use more characters",
                identifier
            ))),
            (None, _) => Err(BudgetError::expense_not_found(identifier)),
        }
    }

    /// Record a new expense
    ///
    /// Rejects unknown categories and negative amounts without touching state.
    /// The budget is not changed.
    pub fn add_expense(&mut self, input: CreateExpenseInput) -> BudgetResult<Expense> {
        let category: Category = input.category.parse()?;

        if input.amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Expense amount cannot be negative (got {})",
                input.amount.to_plain_string()
            )));
        }
        if input.amount > Money::MAX {
            return Err(BudgetError::Validation(format!(
                "Expense amount cannot exceed {}",
                Money::MAX
            )));
        }

        let expense = Expense::new(
            category,
            input.amount,
            input.description.unwrap_or_default(),
            input.date,
        );

        self.state.expenses.push(expense.clone());
        self.persist_expenses();

        info!(
            id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    /// Remove an expense; returns whether one was removed
    ///
    /// An unknown id is not an error.
    pub fn delete_expense(&mut self, id: &ExpenseId) -> bool {
        let before = self.state.expenses.len();
        self.state.expenses.retain(|e| &e.id != id);
        let removed = self.state.expenses.len() != before;

        self.persist_expenses();

        if removed {
            info!(%id, "expense deleted");
        }
        removed
    }

    /// Add money to the budget; zero or negative amounts are ignored
    pub fn add_funds(&mut self, amount: Money) -> bool {
        if !amount.is_positive() || self.state.total_budget + amount > Money::MAX {
            return false;
        }

        self.state.total_budget += amount;
        self.persist_budget();

        info!(added = %amount, budget = %self.state.total_budget, "funds added");
        true
    }

    /// Replace the budget; negative values become zero and oversized ones the maximum
    pub fn set_budget(&mut self, amount: Money) {
        self.state.total_budget = amount.non_negative().min(Money::MAX);
        self.persist_budget();

        info!(budget = %self.state.total_budget, "budget set");
    }

    /// Replace the budget from raw user text; unparsable input becomes zero
    pub fn set_budget_from_input(&mut self, input: &str) -> Money {
        let amount = Money::parse(input).unwrap_or_default();
        self.set_budget(amount);
        self.state.total_budget
    }

    /// Reset to an empty state and erase both stored entries
    pub fn clear_all(&mut self) {
        self.state = BudgetState::default();

        if let Err(e) = self.persistence.clear() {
            warn!(error = %e, "failed to clear stored data");
        }

        info!("all data cleared");
    }

    /// Replace both fields at once, as when restoring a backup
    pub fn replace_state(&mut self, state: BudgetState) {
        self.state = BudgetState::new(
            state.total_budget.non_negative().min(Money::MAX),
            state.expenses,
        );
        self.persist_budget();
        self.persist_expenses();

        info!(
            budget = %self.state.total_budget,
            expenses = self.state.expenses.len(),
            "budget state replaced"
        );
    }

    fn persist_budget(&mut self) {
        if let Err(e) = self.persistence.save_budget(self.state.total_budget) {
            warn!(error = %e, "failed to save budget; keeping in-memory value");
        }
    }

    fn persist_expenses(&mut self) {
        if let Err(e) = self.persistence.save_expenses(&self.state.expenses) {
            warn!(error = %e, "failed to save expenses; keeping in-memory list");
        }
    }
}
