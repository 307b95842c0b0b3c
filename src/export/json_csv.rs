use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::models::entry::Entry;
use crate::store;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub fn export_json(entries: &[Entry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
    let json_data = serde_json::to_string_pretty(&flat)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV in the canonical ledger schema.
pub fn export_csv(entries: &[Entry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    store::csv::write_entries(path, entries)?;

    notify_export_success("CSV", path);
    Ok(())
}
