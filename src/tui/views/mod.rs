//! TUI Views module
//!
//! The dashboard is a single screen: summary cards, category chart, expense
//! ledger and status bar, with dialogs drawn on top.

pub mod chart;
pub mod ledger;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::services::aggregation;
use crate::services::BudgetSummary;
use crate::storage::Persistence;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render<P: Persistence>(frame: &mut Frame, app: &App<P>) {
    let layout = DashboardLayout::new(frame.area());
    let state = app.store.state();
    let summary = BudgetSummary::from_state(state);

    summary::render_header(frame, layout.header, summary.expense_count);
    summary::render_cards(frame, layout.cards, &summary);

    let totals = aggregation::category_totals(state);
    chart::render(frame, layout.chart, &totals, summary.total_spent);

    ledger::render(frame, layout.ledger, &app.ledger(), app.selected_index);

    status_bar::render(frame, layout.status_bar, app.status_message.as_deref());

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<P: Persistence>(frame: &mut Frame, app: &App<P>) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Amount(_) => dialogs::amount::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            let message = match app.store.find(id) {
                Some(expense) => format!(
                    "Delete {} expense of {}?",
                    expense.category, expense.amount
                ),
                None => "Delete this expense?".to_string(),
            };
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::ConfirmClear => {
            dialogs::confirm::render(frame, "Clear the budget and ALL expenses?");
        }
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}
