use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use budget_dashboard::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_import_command,
    handle_report_command, handle_summary_command, BudgetCommands, ExpenseCommands, ExportArgs,
    ImportArgs, ReportArgs,
};
use budget_dashboard::config::logging::{init_logging, LogTarget};
use budget_dashboard::config::{BudgetPaths, Settings};
use budget_dashboard::display::format_category_list;
use budget_dashboard::services::ExpenseStore;
use budget_dashboard::storage::FileStorage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal monthly budget tracker",
    long_about = "Track a monthly budget from the terminal: set a total budget, record \
                  expenses in nine fixed categories, watch spending on an interactive \
                  dashboard and export a paginated report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Show budget figures and spending by category
    Summary,

    /// List the expense categories
    Categories,

    /// Total budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Write the budget report
    Report(ReportArgs),

    /// Export the ledger or a full backup
    Export(ExportArgs),

    /// Restore a JSON or YAML backup
    Import(ImportArgs),

    /// Delete the budget and every expense
    Clear {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_target = match cli.command {
        Some(Commands::Tui) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_logging(&paths, log_target)?;

    let mut store = ExpenseStore::open(FileStorage::new(&paths)?);

    match cli.command {
        Some(Commands::Tui) => {
            budget_dashboard::tui::run_tui(store, settings)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(store.state())?;
        }
        Some(Commands::Categories) => {
            println!("{}", format_category_list());
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, cmd)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(store.state(), &settings, args, Local::now().date_naive())?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(store.state(), args)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&mut store, args)?;
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                println!(
                    "WARNING: This will delete the budget and all {} expenses!",
                    store.expenses().len()
                );
                println!("To proceed, run again with --yes flag:");
                println!("  budget clear --yes");
            } else {
                store.clear_all();
                println!("All data cleared.");
            }
        }
        Some(Commands::Config) => {
            println!("Budget Dashboard Configuration");
            println!("==============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Recent expenses in reports: {}", settings.recent_expense_limit);
            match &settings.report_dir {
                Some(dir) => println!("  Report directory: {}", dir.display()),
                None => println!("  Report directory: (current directory)"),
            }
        }
        None => {
            println!("Budget Dashboard - personal monthly budget tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
