//! Layout definitions for the TUI
//!
//! Header, summary cards, chart and ledger panels, and the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Title line
    pub header: Rect,
    /// Four summary cards side by side
    pub cards: [Rect; 4],
    /// Category bar chart
    pub chart: Rect,
    /// Expense ledger table
    pub ledger: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(4), // Cards
                Constraint::Min(6),    // Chart + ledger
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(vertical[1]);

        // Chart on the left, ledger on the right; stacked when narrow
        let body = if area.width >= 100 {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(vertical[2])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(vertical[2])
        };

        Self {
            header: vertical[0],
            cards: [cards[0], cards[1], cards[2], cards[3]],
            chart: body[0],
            ledger: body[1],
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_puts_chart_beside_ledger() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.chart.y, layout.ledger.y);
        assert!(layout.chart.x < layout.ledger.x);
        assert_eq!(layout.cards.iter().map(|c| c.width).sum::<u16>(), 120);
    }

    #[test]
    fn test_narrow_layout_stacks_panels() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 80, 40));
        assert_eq!(layout.chart.x, layout.ledger.x);
        assert!(layout.chart.y < layout.ledger.y);
    }

    #[test]
    fn test_centered_rect_fixed_fits_small_area() {
        let rect = centered_rect_fixed(60, 12, Rect::new(0, 0, 40, 10));
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }
}
