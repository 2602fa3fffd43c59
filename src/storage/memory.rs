//! In-memory persistence
//!
//! Holds the two entries as serialized text, exactly as the file backend
//! would, so corrupt or legacy payloads can be injected in tests. Write
//! failures can be simulated with [`MemoryStorage::fail_writes`].

use tracing::warn;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};

use super::persistence::{parse_budget_text, parse_expenses_json, Persistence};

/// Persistence that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    budget: Option<String>,
    expenses: Option<String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text for either entry
    pub fn with_raw(budget: Option<&str>, expenses: Option<&str>) -> Self {
        Self {
            budget: budget.map(str::to_string),
            expenses: expenses.map(str::to_string),
            fail_writes: false,
        }
    }

    /// Make every subsequent save and clear fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw_budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn raw_expenses(&self) -> Option<&str> {
        self.expenses.as_deref()
    }

    fn check_writable(&self) -> BudgetResult<()> {
        if self.fail_writes {
            Err(BudgetError::Storage("storage is not writable".into()))
        } else {
            Ok(())
        }
    }
}

impl Persistence for MemoryStorage {
    fn load_budget(&self) -> Money {
        match self.budget.as_deref() {
            Some(text) => parse_budget_text(text).unwrap_or_else(|| {
                warn!("stored budget is not a valid amount, using 0");
                Money::zero()
            }),
            None => Money::zero(),
        }
    }

    fn load_expenses(&self) -> Vec<Expense> {
        match self.expenses.as_deref() {
            Some(text) => parse_expenses_json(text).unwrap_or_else(|e| {
                warn!(error = %e, "stored expenses are malformed, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn save_budget(&mut self, value: Money) -> BudgetResult<()> {
        self.check_writable()?;
        self.budget = Some(value.to_plain_string());
        Ok(())
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> BudgetResult<()> {
        self.check_writable()?;
        self.expenses = Some(serde_json::to_string(expenses)?);
        Ok(())
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.check_writable()?;
        self.budget = None;
        self.expenses = None;
        Ok(())
    }
}
