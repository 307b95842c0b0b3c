//! Flat-file persistence for the allowance ledger.
//!
//! Everything on disk is a string; numeric coercion happens here on load.
//! Loading is schema-tolerant: columns are matched by header name, missing
//! columns default to empty, unknown columns are dropped. Writing always
//! restores the canonical column order.

use std::fs::OpenOptions;
use std::path::Path;

use crate::errors::AppResult;
use crate::models::entry::{COLUMNS, Entry, coerce_number};
use crate::models::event_type::EventType;
use crate::models::remote_type::RemoteType;
use crate::models::work_mode::WorkMode;

/// Column set of the guided `add` output path. No Per_Diem_Total.
pub const GUIDED_COLUMNS: [&str; 10] = [
    "Start",
    "End",
    "Event_Type",
    "Work_Mode",
    "Remote_Type",
    "Per_Diem_Rate",
    "Km_Rate",
    "Distance_km",
    "Travel_Cost",
    "Description",
];

pub fn load_entries(path: &Path) -> AppResult<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        entries.push(Entry {
            start: field("Start"),
            end: field("End"),
            event_type: EventType::parse(&field("Event_Type")),
            work_mode: WorkMode::parse(&field("Work_Mode")),
            remote_type: RemoteType::parse(&field("Remote_Type")),
            per_diem_rate: coerce_number(&field("Per_Diem_Rate")),
            km_rate: coerce_number(&field("Km_Rate")),
            distance_km: coerce_number(&field("Distance_km")),
            per_diem_total: coerce_number(&field("Per_Diem_Total")),
            travel_cost: coerce_number(&field("Travel_Cost")),
            description: field("Description"),
        });
    }

    Ok(entries)
}

/// Full overwrite of the destination, canonical header first.
pub fn write_entries(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(COLUMNS)?;
    for entry in entries {
        writer.write_record(entry.to_record())?;
    }

    writer.flush()?;
    Ok(())
}

/// Append one record to the guided-entry CSV, creating it with the
/// reduced header when absent.
pub fn append_guided(path: &Path, entry: &Entry) -> AppResult<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        writer.write_record(GUIDED_COLUMNS)?;
    }

    let full = entry.to_record();
    // Canonical record minus the Per_Diem_Total column (index 8).
    let reduced: Vec<&str> = full
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 8)
        .map(|(_, v)| v.as_str())
        .collect();
    writer.write_record(reduced)?;

    writer.flush()?;
    Ok(())
}
