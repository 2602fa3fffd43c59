//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_expense_details, format_expense_ledger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseDate, Money};
use crate::services::aggregation;
use crate::services::{CreateExpenseInput, ExpenseStore};
use crate::storage::Persistence;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Category name (see `budget categories`)
        category: String,
        /// Amount in rupees (e.g., "450" or "1,299.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Optional note
        #[arg(short, long)]
        description: Option<String>,
        /// Date of the spend (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID or unique prefix
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique prefix
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<P: Persistence>(
    store: &mut ExpenseStore<P>,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
            date,
        } => {
            let input = CreateExpenseInput {
                category,
                amount: Money::parse(&amount)
                    .map_err(|e| BudgetError::Validation(e.to_string()))?,
                description,
                date: parse_date_arg(date.as_deref(), Local::now().date_naive())?,
            };

            let expense = store.add_expense(input)?;
            println!("Recorded expense {}", expense.id);
            print!("{}", format_expense_details(&expense));
        }

        ExpenseCommands::List { limit } => {
            let sorted = aggregation::sorted_by_date_descending(store.state());
            let shown = limit.unwrap_or(sorted.len());
            println!(
                "{}",
                format_expense_ledger(sorted.iter().take(shown).copied(), store.expenses())
            );

            if shown < sorted.len() {
                println!("Showing {} of {} expenses.", shown, sorted.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let id = store.resolve_id(&id)?;
            let expense = store
                .find(&id)
                .ok_or_else(|| BudgetError::expense_not_found(id.as_str()))?;
            print!("{}", format_expense_details(expense));
        }

        ExpenseCommands::Delete { id } => {
            let id = store.resolve_id(&id)?;
            if store.delete_expense(&id) {
                println!("Deleted expense {}", id);
            }
        }
    }

    Ok(())
}

/// Parse a `--date` argument, falling back to `today`
fn parse_date_arg(arg: Option<&str>, today: NaiveDate) -> BudgetResult<ExpenseDate> {
    match arg {
        Some(text) => ExpenseDate::parse(text).map_err(|e| BudgetError::Validation(e.to_string())),
        None => Ok(ExpenseDate::from_date(today)),
    }
}
