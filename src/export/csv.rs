//! CSV Export functionality
//!
//! Exports the expense ledger to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::services::aggregation;

const HEADER: [&str; 5] = ["ID", "Date", "Category", "Description", "Amount"];

/// Export every expense, newest first
///
/// Amounts are plain rupee figures (`1499.5`) so spreadsheets treat them as
/// numbers.
pub fn export_expenses_csv<W: Write>(state: &BudgetState, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in aggregation::sorted_by_date_descending(state) {
        let amount = expense.amount.to_plain_string();
        csv_writer
            .write_record([
                expense.id.as_str(),
                expense.date.as_str(),
                expense.category.name(),
                expense.description.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Export per-category totals
pub fn export_category_totals_csv<W: Write>(state: &BudgetState, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let spent = aggregation::total_spent(state);

    csv_writer
        .write_record(["Category", "Amount", "Percentage"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for total in aggregation::category_totals(state) {
        let share = aggregation::category_share(total.total, spent)
            .map(|p| format!("{:.2}", p))
            .unwrap_or_default();
        csv_writer
            .write_record([
                total.category.name(),
                total.total.to_plain_string().as_str(),
                share.as_str(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseDate, Money};

    fn test_state() -> BudgetState {
        BudgetState::new(
            Money::from_rupees(5000),
            vec![
                Expense::new(
                    Category::Food,
                    Money::from_paise(149950),
                    "Dinner, drinks",
                    ExpenseDate::parse("2024-03-01").unwrap(),
                ),
                Expense::new(
                    Category::Shopping,
                    Money::from_rupees(500),
                    "",
                    ExpenseDate::parse("2024-03-09").unwrap(),
                ),
            ],
        )
    }

    #[test]
    fn test_export_expenses_csv() {
        let mut output = Vec::new();
        export_expenses_csv(&test_state(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("2024-03-09,Shopping,,500"));
        assert!(lines[2].contains("\"Dinner, drinks\",1499.5"));
    }

    #[test]
    fn test_export_empty_state() {
        let mut output = Vec::new();
        export_expenses_csv(&BudgetState::default(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_export_category_totals_csv() {
        let mut output = Vec::new();
        export_category_totals_csv(&test_state(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("Food,1499.5,74.99"));
        assert!(csv.contains("Shopping,500,25.01"));
    }
}
