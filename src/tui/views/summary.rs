//! Header and summary cards
//!
//! Total budget, total spent, remaining and percent used, each in its own card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format::{format_currency, format_percent};
use crate::services::BudgetSummary;
use crate::tui::theme;

/// Render the title line
pub fn render_header(frame: &mut Frame, area: Rect, expense_count: usize) {
    let line = Line::from(vec![
        Span::styled(
            " Budget Dashboard ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} expense{}",
                expense_count,
                if expense_count == 1 { "" } else { "s" }
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the four summary cards
pub fn render_cards(frame: &mut Frame, areas: [Rect; 4], summary: &BudgetSummary) {
    let over = summary.is_over_budget();
    let cards = [
        ("Total Budget", format_currency(summary.total_budget), Color::Cyan),
        ("Total Spent", format_currency(summary.total_spent), Color::Yellow),
        (
            "Remaining",
            format_currency(summary.remaining),
            theme::remaining_color(over),
        ),
        (
            "Budget Used",
            format_percent(summary.percent_used),
            if summary.percent_used > 100.0 {
                Color::Red
            } else {
                Color::White
            },
        ),
    ];

    for (area, (title, value, color)) in areas.into_iter().zip(cards) {
        render_card(frame, area, title, value, color);
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::DarkGray))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}
