//! Budget CLI commands
//!
//! Implements CLI commands for setting the total budget and adding funds.

use clap::Subcommand;

use crate::display::format_currency;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::ExpenseStore;
use crate::storage::Persistence;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the current total budget
    Show,

    /// Replace the total budget (non-numeric or negative input sets it to 0)
    Set {
        /// Amount in rupees (e.g., "25000" or "₹25,000")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add money to the total budget
    AddFunds {
        /// Amount in rupees; must be positive
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<P: Persistence>(
    store: &mut ExpenseStore<P>,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Show => {
            println!("Total budget: {}", format_currency(store.total_budget()));
        }

        BudgetCommands::Set { amount } => {
            let budget = store.set_budget_from_input(&amount);
            println!("Total budget set to {}", format_currency(budget));
        }

        BudgetCommands::AddFunds { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            if store.add_funds(amount) {
                println!("Added {}.", format_currency(amount));
                println!("Total budget: {}", format_currency(store.total_budget()));
            } else {
                println!("Nothing added: the amount must be greater than zero.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_set_and_add_funds() {
        let mut store = ExpenseStore::open(MemoryStorage::new());

        handle_budget_command(
            &mut store,
            BudgetCommands::Set {
                amount: "₹10,000".into(),
            },
        )
        .unwrap();
        handle_budget_command(
            &mut store,
            BudgetCommands::AddFunds {
                amount: "2500.50".into(),
            },
        )
        .unwrap();

        assert_eq!(store.total_budget(), Money::from_paise(1_250_050));
    }

    #[test]
    fn test_add_funds_rejects_text() {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        let err = handle_budget_command(
            &mut store,
            BudgetCommands::AddFunds {
                amount: "plenty".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_add_negative_funds_is_ignored() {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        store.set_budget(Money::from_rupees(1000));

        handle_budget_command(
            &mut store,
            BudgetCommands::AddFunds {
                amount: "-50".into(),
            },
        )
        .unwrap();

        assert_eq!(store.total_budget(), Money::from_rupees(1000));
    }
}
