//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter filtered by the `BUDGET_LOG`
//! environment variable (default `warn`). Command-line runs log to stderr;
//! the TUI logs to a file because it owns the terminal.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "BUDGET_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
pub fn init_logging(paths: &BudgetPaths, target: LogTarget) -> Result<(), BudgetError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e)))
}
