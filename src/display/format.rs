//! Shared formatting helpers
//!
//! The same currency and date strings appear on the terminal and in the
//! exported report, so both go through these functions.

use chrono::{Datelike, NaiveDate};

use crate::models::Money;

/// Format an amount as Indian rupees with no fractional digits (`₹1,23,457`)
pub fn format_currency(amount: Money) -> String {
    amount.to_string()
}

/// Format a date for tables and lists (`5 Mar 2024`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Format a date the way the report header and file name use it (`5/3/2024`)
pub fn format_report_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Percentage with one decimal place (`45.0%`)
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Horizontal bar scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_chars` characters, ending with an ellipsis when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}

/// Section separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
