//! Application state for the TUI
//!
//! The App struct owns the expense store and holds everything needed for
//! rendering and handling events.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{Expense, ExpenseId};
use crate::reports::BudgetReport;
use crate::services::aggregation;
use crate::services::ExpenseStore;
use crate::storage::Persistence;

use super::dialogs::amount::{AmountFormState, AmountPurpose};
use super::dialogs::expense::ExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Amount(AmountPurpose),
    ConfirmDelete(ExpenseId),
    ConfirmClear,
    Help,
}

/// Main application state
pub struct App<P: Persistence> {
    /// The expense store
    pub store: ExpenseStore<P>,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the ledger (date-sorted)
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,

    /// Add-funds / set-budget form state
    pub amount_form: AmountFormState,
}

impl<P: Persistence> App<P> {
    pub fn new(store: ExpenseStore<P>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
            amount_form: AmountFormState::new(AmountPurpose::AddFunds),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveDialog::Amount(purpose) => {
                self.amount_form = AmountFormState::new(*purpose);
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Expenses in ledger order (newest first)
    pub fn ledger(&self) -> Vec<&Expense> {
        aggregation::sorted_by_date_descending(self.store.state())
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.ledger().get(self.selected_index).copied()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max = self.store.expenses().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.store.expenses().len().saturating_sub(1);
    }

    /// Keep the selection inside the ledger after a removal
    pub fn clamp_selection(&mut self) {
        let len = self.store.expenses().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Ask for confirmation before deleting the selected expense
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_expense().map(|e| e.id.clone()) {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        } else {
            self.set_status("Nothing to delete");
        }
    }

    /// Carry out whatever the open confirmation dialog asked for
    pub fn confirm(&mut self) {
        match std::mem::take(&mut self.active_dialog) {
            ActiveDialog::ConfirmDelete(id) => {
                if self.store.delete_expense(&id) {
                    self.set_status("Expense deleted");
                }
                self.clamp_selection();
            }
            ActiveDialog::ConfirmClear => {
                self.store.clear_all();
                self.selected_index = 0;
                self.set_status("All data cleared");
            }
            other => self.active_dialog = other,
        }
    }

    /// Write the budget report to the configured directory
    pub fn export_report(&mut self, today: NaiveDate) -> BudgetResult<PathBuf> {
        let report =
            BudgetReport::generate(self.store.state(), today, self.settings.recent_expense_limit);
        let dir = self.settings.report_output_dir(None);

        match report.write_to_dir(&dir) {
            Ok(path) => {
                self.set_status(format!("Report saved to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                warn!(error = %e, "report export failed");
                self.set_status(format!("Export failed: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseDate, Money};
    use crate::services::CreateExpenseInput;
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;

    fn test_app() -> App<MemoryStorage> {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        store.set_budget(Money::from_rupees(5000));
        for (category, rupees, date) in [
            ("Food", 200, "2024-03-02"),
            ("Shopping", 900, "2024-03-09"),
            ("Utilities", 1100, "2024-03-05"),
        ] {
            store
                .add_expense(CreateExpenseInput {
                    category: category.into(),
                    amount: Money::from_rupees(rupees),
                    description: None,
                    date: ExpenseDate::parse(date).unwrap(),
                })
                .unwrap();
        }
        App::new(store, Settings::default())
    }

    #[test]
    fn test_selection_follows_ledger_order() {
        let mut app = test_app();
        assert_eq!(app.selected_expense().unwrap().category, Category::Shopping);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.selected_expense().unwrap().category, Category::Food);

        app.move_up();
        assert_eq!(app.selected_expense().unwrap().category, Category::Utilities);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = test_app();
        app.move_down();
        app.move_down();

        app.request_delete();
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));
        assert_eq!(app.store.expenses().len(), 3);

        app.confirm();
        assert!(!app.has_dialog());
        assert_eq!(app.store.expenses().len(), 2);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_clear_all_after_confirmation() {
        let mut app = test_app();
        app.open_dialog(ActiveDialog::ConfirmClear);
        app.confirm();

        assert!(app.store.state().is_empty());
        assert_eq!(app.store.total_budget(), Money::zero());
        assert!(app.selected_expense().is_none());
    }

    #[test]
    fn test_export_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app();
        app.settings.report_dir = Some(temp_dir.path().to_path_buf());

        let path = app
            .export_report(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
            .unwrap();

        assert_eq!(path, temp_dir.path().join("budget-report-10-3-2024.txt"));
        assert!(app.status_message.unwrap().contains("Report saved"));
    }
}
