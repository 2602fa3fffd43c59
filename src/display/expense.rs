//! Expense display formatting
//!
//! Formats the expense ledger and single-expense details for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::format::{format_currency, format_date, truncate};

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl LedgerRow {
    fn new(expense: &Expense, all: &[Expense]) -> Self {
        Self {
            id: expense.id.unique_prefix(all.iter().map(|e| &e.id)).to_string(),
            date: format_date(expense.date.date()),
            category: expense.category.name().to_string(),
            description: truncate(expense.display_description(), DESCRIPTION_WIDTH),
            amount: format_currency(expense.amount),
        }
    }
}

/// Format expenses as a ledger table, in the order given
///
/// Ids are shortened only as far as they stay unique among `all`.
pub fn format_expense_ledger<'a, I>(expenses: I, all: &[Expense]) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<LedgerRow> = expenses
        .into_iter()
        .map(|expense| LedgerRow::new(expense, all))
        .collect();
    if rows.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(expense.date.date())));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Amount:      {}\n", format_currency(expense.amount)));
    output.push_str(&format!("Description: {}\n", expense.display_description()));

    output
}
