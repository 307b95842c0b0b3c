use crate::config::Config;

/// Per-diem and mileage rate configuration for one derivation pass.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    /// Per-diem for remote work at a domestic location (per day).
    pub inland_rate: f64,
    /// Per-diem for remote work at a foreign location (per day).
    pub foreign_rate: f64,
    /// Reimbursement per travelled kilometer.
    pub km_rate: f64,
}

impl Rates {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            inland_rate: cfg.inland_rate,
            foreign_rate: cfg.foreign_rate,
            km_rate: cfg.km_rate,
        }
    }
}
