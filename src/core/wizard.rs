//! Guided entry: build one raw ledger row from sequential prompts.
//!
//! This front end constructs the row directly, without the seeder, and
//! its output goes to a separate reduced-schema CSV (see store::csv).

use std::io::{BufRead, Write};

use crate::core::derive::derive_entry;
use crate::core::rates::Rates;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, coerce_number};
use crate::models::event_type::EventType;
use crate::models::remote_type::RemoteType;
use crate::models::work_mode::WorkMode;
use crate::utils::date::parse_stamp;

/// Prompt for one entry, then derive its rates, costs and default
/// description. `input` is generic so tests can pipe answers in.
pub fn run_wizard<R: BufRead>(mut input: R, rates: &Rates) -> AppResult<Entry> {
    let start = ask(&mut input, "Start (YYYY-MM-DD or YYYY-MM-DDTHH:MM): ")?;
    parse_stamp(&start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;

    let end = ask(&mut input, "End   (YYYY-MM-DD or YYYY-MM-DDTHH:MM): ")?;
    parse_stamp(&end).ok_or_else(|| AppError::InvalidDate(end.clone()))?;

    let event_type = match EventType::parse(&ask(&mut input, "Event type [work/travel/free]: ")?) {
        EventType::Other(raw) => {
            return Err(AppError::InvalidAnswer(format!(
                "event type '{raw}': use work, travel or free"
            )));
        }
        kind => kind,
    };

    let mut work_mode = WorkMode::Free;
    let mut remote_type = RemoteType::NA;
    let mut distance_km = 0.0;

    match event_type {
        EventType::Work => {
            work_mode = match WorkMode::parse(&ask(&mut input, "Work mode [onsite/remote]: ")?) {
                mode @ (WorkMode::Onsite | WorkMode::Remote) => mode,
                other => {
                    return Err(AppError::InvalidAnswer(format!(
                        "work mode '{}': use onsite or remote",
                        other.as_str()
                    )));
                }
            };

            if work_mode == WorkMode::Remote {
                remote_type = match RemoteType::parse(&ask(
                    &mut input,
                    "Remote location [domestic/foreign]: ",
                )?) {
                    loc @ (RemoteType::Domestic | RemoteType::Foreign) => loc,
                    other => {
                        return Err(AppError::InvalidAnswer(format!(
                            "remote location '{}': use domestic or foreign",
                            other.as_str()
                        )));
                    }
                };
            }
        }
        EventType::Travel => {
            work_mode = WorkMode::Remote;
            distance_km = coerce_number(&ask(&mut input, "Distance in km: ")?);
        }
        _ => {}
    }

    let description = ask(&mut input, "Description (leave blank for a default): ")?;

    let mut entry = Entry {
        start,
        end,
        event_type,
        work_mode,
        remote_type,
        per_diem_rate: 0.0,
        km_rate: 0.0,
        distance_km,
        per_diem_total: 0.0,
        travel_cost: 0.0,
        description,
    };

    derive_entry(&mut entry, rates)?;
    Ok(entry)
}

fn ask<R: BufRead>(input: &mut R, prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    std::io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
