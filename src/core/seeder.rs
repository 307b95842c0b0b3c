//! Timeline seeder: one free placeholder per calendar day.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::event_type::EventType;
use crate::models::remote_type::RemoteType;
use crate::models::work_mode::WorkMode;
use crate::utils::date::{DATE_FORMAT, parse_date};

/// Generate placeholder entries for every day in `[from, to]` inclusive.
///
/// Unparsable bounds are fatal; a reversed range yields an empty ledger.
pub fn seed_timeline(from: &str, to: &str) -> AppResult<Vec<Entry>> {
    let from_day = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
    let to_day = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;

    let mut entries = Vec::new();
    let mut day = from_day;
    while day <= to_day {
        entries.push(free_day(day));
        day = day.succ_opt().unwrap();
    }

    Ok(entries)
}

fn free_day(day: NaiveDate) -> Entry {
    let start = format!("{}T00:00", day.format(DATE_FORMAT));
    let end = format!("{}T23:59", day.format(DATE_FORMAT));
    let description = format!("Free from {} to {}", start, end);

    Entry {
        start,
        end,
        event_type: EventType::Free,
        work_mode: WorkMode::Free,
        remote_type: RemoteType::NA,
        per_diem_rate: 0.0,
        km_rate: 0.0,
        distance_km: 0.0,
        per_diem_total: 0.0,
        travel_cost: 0.0,
        description,
    }
}
