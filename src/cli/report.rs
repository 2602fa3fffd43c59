//! CLI commands for reports
//!
//! Provides the summary view and the exportable budget report.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_summary};
use crate::error::BudgetResult;
use crate::models::BudgetState;
use crate::reports::BudgetReport;
use crate::services::aggregation;
use crate::services::BudgetSummary;

/// Arguments for `budget report`
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Directory to write the report into (defaults to the configured report
    /// directory, then the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of most recently added expenses to include
    #[arg(long)]
    pub recent: Option<usize>,

    /// Print the report instead of writing a file
    #[arg(long)]
    pub print: bool,
}

/// Print the summary figures and category breakdown
pub fn handle_summary_command(state: &BudgetState) -> BudgetResult<()> {
    let summary = BudgetSummary::from_state(state);
    let totals = aggregation::category_totals(state);

    println!("{}", format_summary(&summary));
    println!("{}", format_category_breakdown(&totals, summary.total_spent));

    Ok(())
}

/// Generate the budget report for `today`
///
/// Returns the path written, or `None` when printing to stdout.
pub fn handle_report_command(
    state: &BudgetState,
    settings: &Settings,
    args: ReportArgs,
    today: NaiveDate,
) -> BudgetResult<Option<PathBuf>> {
    let recent = args.recent.unwrap_or(settings.recent_expense_limit);
    let report = BudgetReport::generate(state, today, recent);

    if args.print {
        print!("{}", report.render_text());
        return Ok(None);
    }

    let dir = settings.report_output_dir(args.output);
    let path = report.write_to_dir(&dir)?;

    println!(
        "Report written to {} ({} page{})",
        path.display(),
        report.page_count(),
        if report.page_count() == 1 { "" } else { "s" }
    );

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseDate, Money};
    use tempfile::TempDir;

    #[test]
    fn test_report_uses_configured_dir() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            report_dir: Some(temp_dir.path().to_path_buf()),
            ..Settings::default()
        };
        let state = BudgetState::new(
            Money::from_rupees(1000),
            vec![Expense::new(
                Category::Food,
                Money::from_rupees(250),
                "",
                ExpenseDate::parse("2024-03-01").unwrap(),
            )],
        );
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let path = handle_report_command(&state, &settings, ReportArgs::default(), today)
            .unwrap()
            .unwrap();

        assert_eq!(path, temp_dir.path().join("budget-report-5-3-2024.txt"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Budget Used: 25.0%"));
    }

    #[test]
    fn test_report_output_overrides_settings() {
        let configured = TempDir::new().unwrap();
        let requested = TempDir::new().unwrap();
        let settings = Settings {
            report_dir: Some(configured.path().to_path_buf()),
            ..Settings::default()
        };
        let args = ReportArgs {
            output: Some(requested.path().to_path_buf()),
            ..ReportArgs::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let path = handle_report_command(&BudgetState::default(), &settings, args, today)
            .unwrap()
            .unwrap();

        assert!(path.starts_with(requested.path()));
    }
}
