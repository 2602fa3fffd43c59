//! Key handling for the TUI
//!
//! Routes key presses to the open dialog, or to the dashboard shortcuts when
//! no dialog is open.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::storage::Persistence;

use super::app::{ActiveDialog, App};
use super::dialogs::{self, amount::AmountPurpose};

/// Handle a key press; `today` dates exported reports
pub fn handle_key_event<P: Persistence>(app: &mut App<P>, key: KeyEvent, today: NaiveDate) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key, today);
    }
}

fn handle_dialog_key<P: Persistence>(app: &mut App<P>, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Amount(_) => {
            dialogs::amount::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmClear => {
            dialogs::confirm::handle_key(app, key);
        }
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
    }
}

fn handle_normal_key<P: Persistence>(app: &mut App<P>, key: KeyEvent, today: NaiveDate) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('f') => app.open_dialog(ActiveDialog::Amount(AmountPurpose::AddFunds)),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::Amount(AmountPurpose::SetBudget)),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::ConfirmClear),

        KeyCode::Char('e') => {
            // Failure is reported on the status bar
            let _ = app.export_report(today);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{ExpenseDate, Money};
    use crate::services::{CreateExpenseInput, ExpenseStore};
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn press(app: &mut App<MemoryStorage>, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), today());
    }

    fn app_with_expenses(n: usize) -> App<MemoryStorage> {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        store.set_budget(Money::from_rupees(1000));
        for day in 1..=n {
            store
                .add_expense(CreateExpenseInput {
                    category: "Food".into(),
                    amount: Money::from_rupees(10),
                    description: None,
                    date: ExpenseDate::parse(&format!("2024-03-{:02}", day)).unwrap(),
                })
                .unwrap();
        }
        App::new(store, Settings::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_expenses(0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = app_with_expenses(0);
        app.open_dialog(ActiveDialog::AddExpense);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            today(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation() {
        let mut app = app_with_expenses(4);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_index, 3);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index, 3);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_index, 2);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_dialog_keys_do_not_reach_dashboard() {
        let mut app = app_with_expenses(1);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        // 'q' is ignored on the category field instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = app_with_expenses(2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.expenses().len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.expenses().len(), 1);
        // The newest (2 Mar) was selected and removed
        assert_eq!(app.store.expenses()[0].date.as_str(), "2024-03-01");
    }

    #[test]
    fn test_delete_on_empty_ledger() {
        let mut app = app_with_expenses(0);
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Nothing to delete"));
    }

    #[test]
    fn test_clear_flow() {
        let mut app = app_with_expenses(3);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);

        assert!(app.store.state().is_empty());
        assert_eq!(app.store.total_budget(), Money::zero());
    }

    #[test]
    fn test_add_funds_flow() {
        let mut app = app_with_expenses(0);
        press(&mut app, KeyCode::Char('f'));
        for c in "250".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.total_budget(), Money::from_rupees(1250));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app_with_expenses(0);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_export_key_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with_expenses(1);
        app.settings.report_dir = Some(temp_dir.path().to_path_buf());

        press(&mut app, KeyCode::Char('e'));

        assert!(temp_dir.path().join("budget-report-10-3-2024.txt").exists());
    }
}
