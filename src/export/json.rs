//! JSON Export functionality
//!
//! Exports the full budget state to JSON with schema versioning, and reads
//! such an export back for restore.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Expense, Money};
use crate::services::aggregation;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full backup of the budget state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub total_budget: Money,

    /// Expenses in insertion order
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Summary figures recorded alongside the data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_spent: Money,
    /// Earliest expense date, as stored
    pub earliest_expense: Option<String>,
    /// Latest expense date, as stored
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Snapshot the given state
    pub fn from_state(state: &BudgetState) -> Self {
        let earliest_expense = state
            .expenses
            .iter()
            .map(|e| &e.date)
            .min()
            .map(|d| d.to_string());
        let latest_expense = state
            .expenses
            .iter()
            .map(|e| &e.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: state.expenses.len(),
            total_spent: aggregation::total_spent(state),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            total_budget: state.total_budget,
            expenses: state.expenses.clone(),
            metadata,
        }
    }

    /// Check the export can be restored as-is
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.total_budget.is_negative() {
            return Err(format!(
                "Total budget cannot be negative (got {})",
                self.total_budget.to_plain_string()
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id.as_str()) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            if expense.amount.is_negative() {
                return Err(format!("Expense {} has a negative amount", expense.id));
            }
        }

        Ok(())
    }

    /// The budget state held by this export
    pub fn into_state(self) -> BudgetState {
        BudgetState::new(self.total_budget, self.expenses)
    }
}

/// Export the full state to JSON
pub fn export_full_json<W: Write>(
    state: &BudgetState,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = FullExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back, validating it
pub fn import_from_json(json_str: &str) -> BudgetResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    export.validate().map_err(BudgetError::Import)?;

    Ok(export)
}
