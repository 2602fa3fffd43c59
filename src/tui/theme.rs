//! Terminal colours for the dashboard

use ratatui::style::Color;

use crate::models::Category;

/// Chart and badge colour for a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Rgb(239, 68, 68),
        Category::Transportation => Color::Rgb(59, 130, 246),
        Category::Utilities => Color::Rgb(234, 179, 8),
        Category::Entertainment => Color::Rgb(168, 85, 247),
        Category::Shopping => Color::Rgb(236, 72, 153),
        Category::Healthcare => Color::Rgb(34, 197, 94),
        Category::Education => Color::Rgb(249, 115, 22),
        Category::RoomRent => Color::Rgb(20, 184, 166),
        Category::Other => Color::Gray,
    }
}

/// Colour for the remaining-budget figure
pub fn remaining_color(over_budget: bool) -> Color {
    if over_budget {
        Color::Red
    } else {
        Color::Green
    }
}
