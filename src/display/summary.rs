//! Budget summary display formatting
//!
//! Formats the headline figures, category breakdown and category list for
//! terminal output.

use crate::models::{Category, Money};
use crate::services::aggregation::{category_share, BudgetSummary, CategoryTotal};

use super::format::{format_bar, format_currency, format_percent, separator};

const BAR_WIDTH: usize = 20;
const LINE_WIDTH: usize = 48;

/// Format the summary cards as text
pub fn format_summary(summary: &BudgetSummary) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Total Budget:",
        format_currency(summary.total_budget)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Total Spent:",
        format_currency(summary.total_spent)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Remaining:",
        format_currency(summary.remaining)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Budget Used:",
        format_percent(summary.percent_used)
    ));
    output.push_str(&format!("{:<16}{:>16}\n", "Expenses:", summary.expense_count));

    if summary.is_over_budget() {
        output.push_str("\nOver budget!\n");
    }

    output
}

/// Format per-category totals with a bar for each
pub fn format_category_breakdown(totals: &[CategoryTotal], total_spent: Money) -> String {
    if totals.is_empty() {
        return "No spending recorded yet.".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.paise())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str("Category Breakdown\n");
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    for total in totals {
        let share = category_share(total.total, total_spent)
            .map(format_percent)
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<15} {} {:>12} {:>7}\n",
            total.category.name(),
            format_bar(total.total.paise() as f64, max, BAR_WIDTH),
            format_currency(total.total),
            share
        ));
    }

    output
}

/// Format the fixed category list
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str("Categories:\n");

    for category in Category::ALL {
        output.push_str(&format!(
            "  {:<15} {}\n",
            category.name(),
            category.color_token()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(budget: i64, spent: i64) -> BudgetSummary {
        let total_budget = Money::from_rupees(budget);
        let total_spent = Money::from_rupees(spent);
        BudgetSummary {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            percent_used: if budget > 0 {
                spent as f64 / budget as f64 * 100.0
            } else {
                0.0
            },
            expense_count: 2,
        }
    }

    #[test]
    fn test_format_summary() {
        let output = format_summary(&summary(10000, 4500));
        assert!(output.contains("₹10,000"));
        assert!(output.contains("₹4,500"));
        assert!(output.contains("₹5,500"));
        assert!(output.contains("45.0%"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_format_summary_over_budget() {
        let output = format_summary(&summary(4000, 4500));
        assert!(output.contains("-₹500"));
        assert!(output.contains("Over budget"));
    }

    #[test]
    fn test_format_category_breakdown() {
        let totals = vec![
            CategoryTotal {
                category: Category::Food,
                total: Money::from_rupees(3000),
            },
            CategoryTotal {
                category: Category::Transportation,
                total: Money::from_rupees(1500),
            },
        ];
        let output = format_category_breakdown(&totals, Money::from_rupees(4500));

        assert!(output.contains("Food"));
        assert!(output.contains("66.7%"));
        assert!(output.contains("33.3%"));
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_format_category_breakdown_empty() {
        let output = format_category_breakdown(&[], Money::zero());
        assert!(output.contains("No spending"));
    }

    #[test]
    fn test_format_category_list() {
        let output = format_category_list();
        assert_eq!(output.lines().count(), 10);
        assert!(output.contains("Room Rent"));
        assert!(output.contains("expense-roomrent"));
    }
}
