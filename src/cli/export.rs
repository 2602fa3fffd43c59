//! CLI commands for data export and import
//!
//! Provides commands for exporting the budget data in various formats and
//! restoring a JSON or YAML backup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{csv, json, yaml};
use crate::models::BudgetState;
use crate::services::ExpenseStore;
use crate::storage::Persistence;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense ledger)
    Csv,
    /// JSON format (full backup)
    Json,
    /// YAML format (full backup, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Arguments for `budget export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// With CSV, export per-category totals instead of the ledger
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for `budget import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON or YAML backup produced by `budget export`
    pub file: PathBuf,

    /// Backup format (defaults to the file extension)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Replace the current data without asking
    #[arg(long)]
    pub force: bool,
}

/// Handle the export command
pub fn handle_export_command(state: &BudgetState, args: ExportArgs) -> BudgetResult<()> {
    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(ExportFormat::Json);

    let file = File::create(&args.output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv if args.categories => {
            csv::export_category_totals_csv(state, &mut writer)?;
            println!("Category totals exported to: {}", args.output.display());
        }
        ExportFormat::Csv => {
            csv::export_expenses_csv(state, &mut writer)?;
            println!(
                "Exported {} expenses to: {}",
                state.expenses.len(),
                args.output.display()
            );
        }
        ExportFormat::Json => {
            json::export_full_json(state, &mut writer, args.pretty)?;
            println!("Full backup exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(state, &mut writer)?;
            println!("Full backup exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Handle the import command
///
/// Returns whether the data was replaced.
pub fn handle_import_command<P: Persistence>(
    store: &mut ExpenseStore<P>,
    args: ImportArgs,
) -> BudgetResult<bool> {
    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.file))
        .ok_or_else(|| {
            BudgetError::Import(format!(
                "Cannot tell the format of {}; pass --format json or --format yaml",
                args.file.display()
            ))
        })?;

    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let export = match format {
        ExportFormat::Json => json::import_from_json(&contents)?,
        ExportFormat::Yaml => yaml::import_from_yaml(&contents)?,
        ExportFormat::Csv => {
            return Err(BudgetError::Import(
                "CSV exports cannot be restored; use a JSON or YAML backup".into(),
            ))
        }
    };

    println!(
        "Backup from {} contains {} expenses and a budget of {}.",
        export.exported_at.format("%Y-%m-%d %H:%M UTC"),
        export.expenses.len(),
        export.total_budget
    );

    if !args.force {
        println!("WARNING: This will overwrite ALL current data!");
        println!("To proceed, run again with --force flag:");
        println!("  budget import {} --force", args.file.display());
        return Ok(false);
    }

    store.replace_state(export.into_state());
    println!("Data restored.");

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseDate, Money};
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        BudgetState::new(
            Money::from_rupees(9000),
            vec![Expense::new(
                Category::Education,
                Money::from_rupees(1200),
                "Books",
                ExpenseDate::parse("2024-03-03").unwrap(),
            )],
        )
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("a/backup.YML")),
            Some(ExportFormat::Yaml)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("ledger.csv")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(ExportFormat::from_path(Path::new("notes")), None);
    }

    #[test]
    fn test_export_then_import() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("backup.yaml");
        let state = sample_state();

        handle_export_command(
            &state,
            ExportArgs {
                output: file.clone(),
                format: None,
                pretty: false,
                categories: false,
            },
        )
        .unwrap();

        let mut store = ExpenseStore::open(MemoryStorage::new());

        let replaced = handle_import_command(
            &mut store,
            ImportArgs {
                file: file.clone(),
                format: None,
                force: false,
            },
        )
        .unwrap();
        assert!(!replaced);
        assert!(store.state().is_empty());

        let replaced = handle_import_command(
            &mut store,
            ImportArgs {
                file,
                format: None,
                force: true,
            },
        )
        .unwrap();
        assert!(replaced);
        assert_eq!(store.state(), &state);
    }

    #[test]
    fn test_import_rejects_csv() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ledger.csv");
        handle_export_command(
            &sample_state(),
            ExportArgs {
                output: file.clone(),
                format: None,
                pretty: false,
                categories: false,
            },
        )
        .unwrap();

        let mut store = ExpenseStore::open(MemoryStorage::new());
        let err = handle_import_command(
            &mut store,
            ImportArgs {
                file,
                format: None,
                force: true,
            },
        )
        .unwrap_err();

        assert!(matches!(err, BudgetError::Import(_)));
    }
}
