//! File-backed persistence
//!
//! The budget is kept as a plain text number in `data/totalBudget` and the
//! expenses as a JSON array in `data/expenses.json`. Each file is written
//! atomically on its own; there is no transaction spanning both.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::{Expense, Money};

use super::file_io::{read_text, remove_if_exists, write_atomic, write_json_atomic};
use super::persistence::{parse_budget_text, parse_expenses_json, Persistence};

/// Persistence backed by two files in the data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    budget_path: PathBuf,
    expenses_path: PathBuf,
}

impl FileStorage {
    /// Create file storage rooted at the configured data directory
    pub fn new(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::with_files(paths.budget_file(), paths.expenses_file()))
    }

    /// Create file storage over explicit file paths
    pub fn with_files(budget_path: PathBuf, expenses_path: PathBuf) -> Self {
        Self {
            budget_path,
            expenses_path,
        }
    }

    pub fn budget_path(&self) -> &PathBuf {
        &self.budget_path
    }

    pub fn expenses_path(&self) -> &PathBuf {
        &self.expenses_path
    }
}

impl Persistence for FileStorage {
    fn load_budget(&self) -> Money {
        match read_text(&self.budget_path) {
            Ok(Some(text)) => parse_budget_text(&text).unwrap_or_else(|| {
                warn!(
                    path = %self.budget_path.display(),
                    "stored budget is not a valid amount, using 0"
                );
                Money::zero()
            }),
            Ok(None) => {
                debug!("no stored budget, using 0");
                Money::zero()
            }
            Err(e) => {
                warn!(error = %e, "could not read stored budget, using 0");
                Money::zero()
            }
        }
    }

    fn load_expenses(&self) -> Vec<Expense> {
        let text = match read_text(&self.expenses_path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("no stored expenses, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "could not read stored expenses, starting empty");
                return Vec::new();
            }
        };

        match parse_expenses_json(&text) {
            Ok(expenses) => {
                debug!(count = expenses.len(), "loaded expenses");
                expenses
            }
            Err(e) => {
                warn!(
                    path = %self.expenses_path.display(),
                    error = %e,
                    "stored expenses are malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save_budget(&mut self, value: Money) -> BudgetResult<()> {
        write_atomic(&self.budget_path, value.to_plain_string().as_bytes())
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> BudgetResult<()> {
        write_json_atomic(&self.expenses_path, &expenses)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        // Attempt both removals; report the first failure
        let budget = remove_if_exists(&self.budget_path);
        let expenses = remove_if_exists(&self.expenses_path);
        budget.and(expenses)
    }
}
