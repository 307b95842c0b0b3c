//! Per-row derivation rule engine.
//!
//! `derive_entry` recomputes the derived fields of a single row from its
//! categorical tags and raw inputs. It is idempotent: re-running it on an
//! already-derived row with unchanged tags and inputs yields the same
//! output, descriptions included since they are only filled when blank.

use crate::core::rates::Rates;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::event_type::EventType;
use crate::models::remote_type::RemoteType;
use crate::models::work_mode::WorkMode;
use crate::utils::date::parse_stamp;

/// Outcome of a full derivation pass over a collection.
#[derive(Debug, Default)]
pub struct DeriveReport {
    pub derived: usize,
    pub skipped: Vec<Skipped>,
}

/// A row left untouched because its dates did not parse.
#[derive(Debug)]
pub struct Skipped {
    pub index: usize,
    pub reason: AppError,
}

/// Run the derivation engine over every row.
///
/// A row whose start or end does not parse is passed through unmodified
/// and recorded in the report; the batch always runs to completion.
pub fn derive_all(entries: Vec<Entry>, rates: &Rates) -> (Vec<Entry>, DeriveReport) {
    let mut report = DeriveReport::default();

    let entries = entries
        .into_iter()
        .enumerate()
        .map(|(index, mut entry)| {
            match derive_entry(&mut entry, rates) {
                Ok(()) => report.derived += 1,
                Err(reason) => report.skipped.push(Skipped { index, reason }),
            }
            entry
        })
        .collect();

    (entries, report)
}

/// Recompute the derived fields of one row in place.
pub fn derive_entry(entry: &mut Entry, rates: &Rates) -> AppResult<()> {
    let start = parse_stamp(&entry.start)
        .ok_or_else(|| AppError::InvalidDate(format!("Start '{}'", entry.start)))?;
    let end = parse_stamp(&entry.end)
        .ok_or_else(|| AppError::InvalidDate(format!("End '{}'", entry.end)))?;

    // Inclusive day count, floored at 1 to guard inverted ranges.
    let days = ((end.date() - start.date()).num_days() + 1).max(1);

    match entry.event_type {
        EventType::Work => {
            if entry.work_mode == WorkMode::Remote {
                entry.per_diem_rate = match entry.remote_type {
                    RemoteType::Domestic => rates.inland_rate,
                    RemoteType::Foreign => rates.foreign_rate,
                    _ => 0.0,
                };
                entry.per_diem_total = round_cents(days as f64 * entry.per_diem_rate);
                entry.km_rate = 0.0;
                entry.distance_km = 0.0;
                entry.travel_cost = 0.0;

                if entry.description.trim().is_empty() {
                    entry.description = format!(
                        "Remote work ({}) from {} to {}",
                        entry.remote_type.as_str(),
                        entry.start,
                        entry.end
                    );
                }
            } else {
                // Onsite or anything else: no allowance at all.
                entry.per_diem_rate = 0.0;
                entry.per_diem_total = 0.0;
                entry.km_rate = 0.0;
                entry.distance_km = 0.0;
                entry.travel_cost = 0.0;

                if entry.description.trim().is_empty() {
                    entry.description = format!(
                        "{} work from {} to {}",
                        entry.work_mode.title(),
                        entry.start,
                        entry.end
                    );
                }
                entry.remote_type = RemoteType::NA;
            }
        }

        EventType::Travel => {
            if entry.distance_km < 0.0 {
                entry.distance_km = 0.0;
            }
            entry.km_rate = rates.km_rate;
            entry.travel_cost = round_cents(entry.distance_km * rates.km_rate);
            entry.per_diem_rate = 0.0;
            entry.per_diem_total = 0.0;

            if entry.description.trim().is_empty() {
                entry.description = format!(
                    "Travel on {} covering {} km",
                    entry.start, entry.distance_km
                );
            }
            if !matches!(entry.work_mode, WorkMode::Onsite | WorkMode::Remote) {
                entry.work_mode = WorkMode::Remote;
            }
            if entry.remote_type.is_blank() {
                entry.remote_type = RemoteType::NA;
            }
        }

        // Free, plus any unrecognized tag which is rewritten to free.
        EventType::Free | EventType::Other(_) => {
            entry.event_type = EventType::Free;
            entry.work_mode = WorkMode::Free;
            entry.remote_type = RemoteType::NA;
            entry.per_diem_rate = 0.0;
            entry.per_diem_total = 0.0;
            entry.km_rate = 0.0;
            entry.distance_km = 0.0;
            entry.travel_cost = 0.0;

            if entry.description.trim().is_empty() {
                entry.description = format!("Free from {} to {}", entry.start, entry.end);
            }
        }
    }

    Ok(())
}

/// Round a monetary amount to 2 decimal places, ties to even.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    let frac = scaled - floor;

    let rounded = if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    };

    rounded / 100.0
}
