//! Add-expense dialog
//!
//! Modal form with a category picker, amount, description and date.
//! Tab moves between fields; Left/Right cycles the category.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, ExpenseDate, Money};
use crate::services::CreateExpenseInput;
use crate::storage::Persistence;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
    Description,
    Date,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Date,
            Self::Date => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Description => Self::Amount,
            Self::Date => Self::Description,
        }
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,

    /// Index into `Category::ALL`
    pub category_index: usize,

    pub amount_input: TextInput,
    pub description_input: TextInput,
    pub date_input: TextInput,

    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Empty form dated today
    pub fn new() -> Self {
        let today = ExpenseDate::from_date(Local::now().date_naive());
        Self {
            focused_field: ExpenseField::Category,
            category_index: 0,
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 450"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.as_str()),
            error_message: None,
        }
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    /// Step through the categories, wrapping at either end
    pub fn cycle_category(&mut self, forward: bool) {
        let len = Category::ALL.len();
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.description_input.focused = self.focused_field == ExpenseField::Description;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// The text input under focus; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    /// Validate the form into store input
    pub fn build_input(&self) -> Result<CreateExpenseInput, String> {
        let amount_text = self.amount_input.value().trim();
        if amount_text.is_empty() {
            return Err("Enter an amount".to_string());
        }
        let amount = Money::parse(amount_text).map_err(|e| e.to_string())?;

        let date = ExpenseDate::parse(self.date_input.value().trim())
            .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())?;

        let description = self.description_input.value().trim();

        Ok(CreateExpenseInput {
            category: self.selected_category().name().to_string(),
            amount,
            description: (!description.is_empty()).then(|| description.to_string()),
            date,
        })
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add-expense dialog
pub fn render<P: Persistence>(frame: &mut Frame, app: &App<P>) {
    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Description
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    render_category_field(frame, chunks[0], form);
    frame.render_widget(form.amount_input.clone(), chunks[1]);
    frame.render_widget(form.description_input.clone(), chunks[2]);
    frame.render_widget(form.date_input.clone(), chunks[3]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn render_category_field(frame: &mut Frame, area: Rect, form: &ExpenseFormState) {
    let focused = form.focused_field == ExpenseField::Category;
    let category = form.selected_category();

    let mut name_style = Style::default().fg(theme::category_color(category));
    if focused {
        name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(if focused { "◀ " } else { "  " }, Style::default().fg(Color::Yellow)),
        Span::styled(category.name(), name_style),
        Span::styled(if focused { " ▶" } else { "" }, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key<P: Persistence>(app: &mut App<P>, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Enter => save_expense(app),

        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.cycle_category(false)
        }
        KeyCode::Right if form.focused_field == ExpenseField::Category => {
            form.cycle_category(true)
        }

        code => {
            let Some(input) = form.focused_input() else {
                return false;
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return false,
            }
            form.error_message = None;
        }
    }

    true
}

fn save_expense<P: Persistence>(app: &mut App<P>) {
    let input = match app.expense_form.build_input() {
        Ok(input) => input,
        Err(e) => {
            app.expense_form.set_error(e);
            return;
        }
    };

    match app.store.add_expense(input) {
        Ok(expense) => {
            app.close_dialog();
            app.set_status(format!(
                "Added {} expense of {}",
                expense.category, expense.amount
            ));
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}
