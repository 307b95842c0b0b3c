use super::{event_type::EventType, remote_type::RemoteType, work_mode::WorkMode};

/// Canonical on-disk column set, in schema order.
pub const COLUMNS: [&str; 11] = [
    "Start",
    "End",
    "Event_Type",
    "Work_Mode",
    "Remote_Type",
    "Per_Diem_Rate",
    "Km_Rate",
    "Distance_km",
    "Per_Diem_Total",
    "Travel_Cost",
    "Description",
];

/// One ledger row.
///
/// `start`/`end` stay raw wire strings ("YYYY-MM-DD" or "YYYY-MM-DDTHH:MM")
/// so unparsable values round-trip unmodified through a recompute pass.
/// Numeric fields are coerced on load; `per_diem_total` and `travel_cost`
/// are derived and never trusted from input.
#[derive(Debug, Clone)]
pub struct Entry {
    pub start: String,
    pub end: String,
    pub event_type: EventType,
    pub work_mode: WorkMode,
    pub remote_type: RemoteType,
    pub per_diem_rate: f64,
    pub km_rate: f64,
    pub distance_km: f64,
    pub per_diem_total: f64,
    pub travel_cost: f64,
    pub description: String,
}

impl Entry {
    /// On-disk form, all fields as strings, canonical column order.
    pub fn to_record(&self) -> [String; 11] {
        [
            self.start.clone(),
            self.end.clone(),
            self.event_type.as_str().to_string(),
            self.work_mode.as_str().to_string(),
            self.remote_type.as_str().to_string(),
            self.per_diem_rate.to_string(),
            self.km_rate.to_string(),
            self.distance_km.to_string(),
            self.per_diem_total.to_string(),
            self.travel_cost.to_string(),
            self.description.clone(),
        ]
    }
}

/// Lenient numeric coercion for raw ledger fields: anything that does not
/// parse as a finite number becomes 0.0. Manual edits must never make a
/// load fail.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
