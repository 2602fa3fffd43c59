//! Single-amount dialog used for adding funds and setting the budget

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::storage::Persistence;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// What the entered amount is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountPurpose {
    AddFunds,
    SetBudget,
}

impl AmountPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddFunds => " Add Funds ",
            Self::SetBudget => " Set Budget ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AmountFormState {
    pub purpose: AmountPurpose,
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl AmountFormState {
    pub fn new(purpose: AmountPurpose) -> Self {
        Self {
            purpose,
            input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 5000")
                .focused(true),
            error_message: None,
        }
    }
}

/// Render the amount dialog
pub fn render<P: Persistence>(frame: &mut Frame, app: &App<P>) {
    let form = &app.amount_form;
    let area = centered_rect_fixed(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(form.purpose.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current budget
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let current = Line::from(vec![
        Span::styled("Current budget: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.store.total_budget().to_string()),
    ]);
    frame.render_widget(Paragraph::new(current), chunks[0]);
    frame.render_widget(form.input.clone(), chunks[1]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the amount dialog
pub fn handle_key<P: Persistence>(app: &mut App<P>, key: KeyEvent) -> bool {
    let input = &mut app.amount_form.input;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit(app),
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }

    true
}

fn submit<P: Persistence>(app: &mut App<P>) {
    let amount = match Money::parse(app.amount_form.input.value()) {
        Ok(amount) => amount,
        Err(e) => {
            app.amount_form.error_message = Some(e.to_string());
            return;
        }
    };

    match app.amount_form.purpose {
        AmountPurpose::AddFunds => {
            if !app.store.add_funds(amount) {
                app.amount_form.error_message = Some("Enter an amount above zero".into());
                return;
            }
            app.set_status(format!("Added {} to the budget", amount));
        }
        AmountPurpose::SetBudget => {
            app.store.set_budget(amount);
            app.set_status(format!("Budget set to {}", app.store.total_budget()));
        }
    }

    app.close_dialog();
}
