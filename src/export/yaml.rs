//! YAML Export functionality
//!
//! Exports the full budget state to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::models::BudgetState;

/// Export the full state to YAML
pub fn export_full_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_state(state);

    let header = format!(
        "# Budget Dashboard Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Restore with: budget import <file>\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML export back, validating it
pub fn import_from_yaml(yaml_str: &str) -> BudgetResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    export.validate().map_err(BudgetError::Import)?;

    Ok(export)
}
