use serde::Serialize;

use crate::models::entry::Entry;

/// Flat export form of a ledger row.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub start: String,
    pub end: String,
    pub event_type: String,
    pub work_mode: String,
    pub remote_type: String,
    pub per_diem_rate: f64,
    pub km_rate: f64,
    pub distance_km: f64,
    pub per_diem_total: f64,
    pub travel_cost: f64,
    pub description: String,
}

impl From<&Entry> for EntryExport {
    fn from(entry: &Entry) -> Self {
        Self {
            start: entry.start.clone(),
            end: entry.end.clone(),
            event_type: entry.event_type.as_str().to_string(),
            work_mode: entry.work_mode.as_str().to_string(),
            remote_type: entry.remote_type.as_str().to_string(),
            per_diem_rate: entry.per_diem_rate,
            km_rate: entry.km_rate,
            distance_km: entry.distance_km,
            per_diem_total: entry.per_diem_total,
            travel_cost: entry.travel_cost,
            description: entry.description.clone(),
        }
    }
}
