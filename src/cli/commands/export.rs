use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger;
use crate::core::rates::Rates;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, export_csv, export_json};
use crate::store;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// Export the derived ledger to an arbitrary destination.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        let path = Path::new(file);

        let ledger_path = expand_tilde(&cfg.ledger);
        if !ledger_path.is_file() {
            return Err(AppError::Ledger(format!(
                "No ledger at {}",
                ledger_path.display()
            )));
        }

        ensure_writable(path, *force)?;

        // Export the derived view of the current ledger contents.
        let entries = store::csv::load_entries(&ledger_path)?;
        let (entries, report) = ledger::finalize(entries, &Rates::from_config(cfg));

        for skip in &report.skipped {
            warning(format!(
                "Row {} exported as-is: {}",
                skip.index + 1,
                skip.reason
            ));
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }
    }
    Ok(())
}
