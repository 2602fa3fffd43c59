//! Budget Report
//!
//! Lays out the exportable report as pages of positioned text blocks and
//! renders them to a plain-text document. Positions are in page units with
//! the first line of a page at [`PAGE_TOP`]; the expense list breaks onto a
//! new page once it passes [`PAGE_HEIGHT_LIMIT`].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::display::format::{format_currency, format_percent, format_report_date};
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::services::aggregation::{self, BudgetSummary, CategoryTotal};
use crate::storage::file_io::write_atomic;

/// Vertical position of the first line on a page
pub const PAGE_TOP: u32 = 20;

/// Past this position the next expense line goes on a new page
pub const PAGE_HEIGHT_LIMIT: u32 = 270;

const TITLE_SIZE: u8 = 20;
const HEADING_SIZE: u8 = 16;
const BODY_SIZE: u8 = 12;
const ENTRY_SIZE: u8 = 10;

const CATEGORY_SECTION_Y: u32 = 115;
const CATEGORY_LINE_STEP: u32 = 10;
const ENTRY_LINE_STEP: u32 = 8;

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub font_size: u8,
    pub y: u32,
}

/// A single report page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPage {
    pub blocks: Vec<TextBlock>,
}

impl ReportPage {
    fn push(&mut self, text: impl Into<String>, font_size: u8, y: u32) {
        self.blocks.push(TextBlock {
            text: text.into(),
            font_size,
            y,
        });
    }
}

/// The exportable budget report
#[derive(Debug, Clone)]
pub struct BudgetReport {
    /// Date printed in the header and used for the file name
    pub generated_on: NaiveDate,
    /// Headline figures at generation time
    pub summary: BudgetSummary,
    /// Categories with spending, in category order
    pub categories: Vec<CategoryTotal>,
    /// Laid-out pages
    pub pages: Vec<ReportPage>,
}

impl BudgetReport {
    /// Lay out a report for the given state
    ///
    /// `recent_limit` caps the expense section to the most recently added
    /// entries.
    pub fn generate(state: &BudgetState, generated_on: NaiveDate, recent_limit: usize) -> Self {
        let summary = BudgetSummary::from_state(state);
        let categories = aggregation::category_totals(state);

        let mut pages = Vec::new();
        let mut page = ReportPage::default();

        page.push("Budget Report", TITLE_SIZE, 20);
        page.push(
            format!("Generated on: {}", format_report_date(generated_on)),
            BODY_SIZE,
            30,
        );

        page.push("Budget Summary", HEADING_SIZE, 50);
        page.push(
            format!("Total Budget: {}", format_currency(summary.total_budget)),
            BODY_SIZE,
            65,
        );
        page.push(
            format!("Total Spent: {}", format_currency(summary.total_spent)),
            BODY_SIZE,
            75,
        );
        page.push(
            format!("Remaining: {}", format_currency(summary.remaining)),
            BODY_SIZE,
            85,
        );
        page.push(
            format!("Budget Used: {}", format_percent(summary.percent_used)),
            BODY_SIZE,
            95,
        );

        let mut y = CATEGORY_SECTION_Y;
        if !categories.is_empty() {
            page.push("Category Breakdown", HEADING_SIZE, y);
            y += 15;

            for ct in &categories {
                let line = match aggregation::category_share(ct.total, summary.total_spent) {
                    Some(share) => format!(
                        "{}: {} ({})",
                        ct.category.name(),
                        format_currency(ct.total),
                        format_percent(share)
                    ),
                    None => format!("{}: {}", ct.category.name(), format_currency(ct.total)),
                };
                page.push(line, BODY_SIZE, y);
                y += CATEGORY_LINE_STEP;
            }
        }

        let recent = aggregation::recent_expenses(state, recent_limit);
        if !recent.is_empty() {
            page.push("Recent Expenses", HEADING_SIZE, y + 20);

            let mut entry_y = y + 35;
            for (i, expense) in recent.iter().enumerate() {
                page.push(
                    format!(
                        "{} - {} - {} - {}",
                        format_report_date(expense.date.date()),
                        expense.category.name(),
                        expense.description,
                        format_currency(expense.amount)
                    ),
                    ENTRY_SIZE,
                    entry_y,
                );
                entry_y += ENTRY_LINE_STEP;

                let more_to_come = i + 1 < recent.len();
                if entry_y > PAGE_HEIGHT_LIMIT && more_to_come {
                    pages.push(std::mem::take(&mut page));
                    entry_y = PAGE_TOP;
                }
            }
        }

        pages.push(page);

        Self {
            generated_on,
            summary,
            categories,
            pages,
        }
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Render as plain text; pages are separated by a form feed
    pub fn render_text(&self) -> String {
        let total = self.pages.len();
        let mut output = String::new();

        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                output.push('\u{000C}');
                output.push('\n');
            }

            for block in &page.blocks {
                match block.font_size {
                    TITLE_SIZE => {
                        output.push_str(&block.text);
                        output.push('\n');
                        output.push_str(&"=".repeat(block.text.chars().count()));
                        output.push('\n');
                    }
                    HEADING_SIZE => {
                        output.push('\n');
                        output.push_str(&block.text);
                        output.push('\n');
                        output.push_str(&"-".repeat(block.text.chars().count()));
                        output.push('\n');
                    }
                    _ => {
                        output.push_str(&block.text);
                        output.push('\n');
                    }
                }
            }

            if total > 1 {
                output.push_str(&format!("\nPage {} of {}\n", index + 1, total));
            }
        }

        output
    }

    /// File name for a report generated on `date` (`budget-report-5-3-2024.txt`)
    pub fn file_name(date: NaiveDate) -> String {
        format!(
            "budget-report-{}.txt",
            format_report_date(date).replace('/', "-")
        )
    }

    /// Write the rendered report into `dir`, returning the file path
    pub fn write_to_dir(&self, dir: &Path) -> BudgetResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|e| BudgetError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

        let path = dir.join(Self::file_name(self.generated_on));
        write_atomic(&path, self.render_text().as_bytes())
            .map_err(|e| BudgetError::Export(e.to_string()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseDate, ExpenseId, Money};
    use tempfile::TempDir;

    fn expense(id: &str, category: Category, rupees: i64, desc: &str, date: &str) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            category,
            amount: Money::from_rupees(rupees),
            description: desc.to_string(),
            date: ExpenseDate::parse(date).unwrap(),
        }
    }

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn texts(page: &ReportPage) -> Vec<(&str, u32)> {
        page.blocks.iter().map(|b| (b.text.as_str(), b.y)).collect()
    }

    #[test]
    fn test_scenario_layout() {
        let state = BudgetState::new(
            Money::from_rupees(10000),
            vec![
                expense("a", Category::Food, 3000, "Groceries", "2024-03-01"),
                expense("b", Category::Transportation, 1500, "Metro card", "2024-03-02"),
            ],
        );

        let report = BudgetReport::generate(&state, report_date(), 10);
        assert_eq!(report.page_count(), 1);

        assert_eq!(
            texts(&report.pages[0]),
            vec![
                ("Budget Report", 20),
                ("Generated on: 5/3/2024", 30),
                ("Budget Summary", 50),
                ("Total Budget: ₹10,000", 65),
                ("Total Spent: ₹4,500", 75),
                ("Remaining: ₹5,500", 85),
                ("Budget Used: 45.0%", 95),
                ("Category Breakdown", 115),
                ("Food: ₹3,000 (66.7%)", 130),
                ("Transportation: ₹1,500 (33.3%)", 140),
                ("Recent Expenses", 170),
                ("1/3/2024 - Food - Groceries - ₹3,000", 185),
                ("2/3/2024 - Transportation - Metro card - ₹1,500", 193),
            ]
        );
    }

    #[test]
    fn test_empty_state_has_summary_only() {
        let report = BudgetReport::generate(&BudgetState::default(), report_date(), 10);
        let page = &report.pages[0];

        assert_eq!(report.page_count(), 1);
        assert_eq!(page.blocks.len(), 7);
        assert_eq!(page.blocks[6].text, "Budget Used: 0.0%");
    }

    #[test]
    fn test_zero_amount_expenses_skip_category_section() {
        let state = BudgetState::new(
            Money::zero(),
            vec![expense("a", Category::Other, 0, "", "2024-03-01")],
        );
        let report = BudgetReport::generate(&state, report_date(), 10);
        let page = &report.pages[0];

        assert!(!page.blocks.iter().any(|b| b.text == "Category Breakdown"));
        let heading = page
            .blocks
            .iter()
            .find(|b| b.text == "Recent Expenses")
            .unwrap();
        assert_eq!(heading.y, 135);
        assert_eq!(page.blocks.last().unwrap().text, "1/3/2024 - Other -  - ₹0");
    }

    #[test]
    fn test_recent_expenses_are_last_added() {
        let expenses: Vec<_> = (1..=12)
            .map(|i| expense(&i.to_string(), Category::Food, i, "", "2024-03-01"))
            .collect();
        let state = BudgetState::new(Money::from_rupees(1000), expenses);

        let report = BudgetReport::generate(&state, report_date(), 10);
        let entries: Vec<_> = report
            .pages
            .iter()
            .flat_map(|p| &p.blocks)
            .filter(|b| b.font_size == ENTRY_SIZE)
            .map(|b| b.text.as_str())
            .collect();

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], "1/3/2024 - Food -  - ₹3");
        assert_eq!(entries[9], "1/3/2024 - Food -  - ₹12");
    }

    #[test]
    fn test_paginates_long_expense_list() {
        // Every category present pushes the expense section to the bottom
        let mut expenses: Vec<_> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| expense(&i.to_string(), c, 100, "", "2024-03-01"))
            .collect();
        expenses.push(expense("last", Category::Food, 100, "", "2024-03-02"));
        let state = BudgetState::new(Money::from_rupees(5000), expenses);

        let report = BudgetReport::generate(&state, report_date(), 10);
        assert_eq!(report.page_count(), 2);

        let first_entries: Vec<_> = report.pages[0]
            .blocks
            .iter()
            .filter(|b| b.font_size == ENTRY_SIZE)
            .map(|b| b.y)
            .collect();
        assert_eq!(first_entries, vec![255, 263]);

        let second: Vec<_> = report.pages[1].blocks.iter().map(|b| b.y).collect();
        assert_eq!(second, vec![20, 28, 36, 44, 52, 60, 68, 76]);

        let text = report.render_text();
        assert_eq!(text.matches('\u{000C}').count(), 1);
        assert!(text.contains("Page 2 of 2"));
    }

    #[test]
    fn test_no_trailing_empty_page() {
        // The second entry ends past the limit but nothing follows it
        let expenses: Vec<_> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| expense(&i.to_string(), c, 100, "", "2024-03-01"))
            .collect();
        let state = BudgetState::new(Money::zero(), expenses);

        let report = BudgetReport::generate(&state, report_date(), 2);
        assert_eq!(report.page_count(), 1);
        assert_eq!(report.pages[0].blocks.last().unwrap().y, 263);
    }

    #[test]
    fn test_render_text() {
        let state = BudgetState::new(
            Money::from_rupees(2000),
            vec![expense("a", Category::RoomRent, 1500, "March", "2024-03-01")],
        );
        let text = BudgetReport::generate(&state, report_date(), 10).render_text();

        assert!(text.starts_with("Budget Report\n=============\n"));
        assert!(text.contains("Room Rent: ₹1,500 (100.0%)"));
        assert!(text.contains("Budget Used: 75.0%"));
        assert!(!text.contains('\u{000C}'));
        assert!(!text.contains("Page 1"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            BudgetReport::file_name(report_date()),
            "budget-report-5-3-2024.txt"
        );
        assert_eq!(
            BudgetReport::file_name(NaiveDate::from_ymd_opt(2023, 11, 25).unwrap()),
            "budget-report-25-11-2023.txt"
        );
    }

    #[test]
    fn test_write_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("reports");
        let report = BudgetReport::generate(&BudgetState::default(), report_date(), 10);

        let path = report.write_to_dir(&out).unwrap();

        assert_eq!(path, out.join("budget-report-5-3-2024.txt"));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, report.render_text());
    }
}
