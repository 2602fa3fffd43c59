//! Category spending chart
//!
//! One bar per category that has any spending, coloured per category.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format::format_percent;
use crate::models::Money;
use crate::services::aggregation::{category_share, CategoryTotal};
use crate::tui::theme;

/// Render the category chart
pub fn render(frame: &mut Frame, area: Rect, totals: &[CategoryTotal], total_spent: Money) {
    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if totals.is_empty() {
        let text = Paragraph::new("No spending yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = totals.iter().map(|t| category_bar(t, total_spent)).collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn category_bar(total: &CategoryTotal, total_spent: Money) -> Bar<'static> {
    let color = theme::category_color(total.category);
    let share = category_share(total.total, total_spent)
        .map(format_percent)
        .unwrap_or_default();

    Bar::default()
        .label(Line::from(format!("{:<14}", total.category.name())))
        .value(total.total.rounded_rupees().max(0) as u64)
        .text_value(format!("{} {}", total.total, share))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}
