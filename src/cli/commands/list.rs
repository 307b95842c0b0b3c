use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use crate::utils::date::parse_stamp;
use crate::utils::formatting::format_money;
use crate::utils::path::expand_tilde;
use crate::utils::period::parse_period;
use crate::utils::table::Table;

/// Render the ledger as an aligned table, optionally period-filtered.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let ledger_path = expand_tilde(&cfg.ledger);
        if !ledger_path.is_file() {
            info(format!(
                "No ledger at {}. Run `perdiem seed` or `perdiem recalc` first.",
                ledger_path.display()
            ));
            return Ok(());
        }

        let entries = store::csv::load_entries(&ledger_path)?;

        let bounds = match period {
            Some(p) => Some(parse_period(p)?),
            None => None,
        };

        let mut table = Table::new(vec![
            "Start",
            "End",
            "Type",
            "Mode",
            "Remote",
            "Per-diem",
            "Travel",
            "Description",
        ]);

        let mut per_diem_sum = 0.0;
        let mut travel_sum = 0.0;
        let mut shown = 0usize;

        for entry in &entries {
            if let Some((lo, hi)) = bounds {
                // Rows with unparsable starts only appear unfiltered.
                match parse_stamp(&entry.start) {
                    Some(ts) if ts.date() >= lo && ts.date() <= hi => {}
                    _ => continue,
                }
            }

            shown += 1;
            per_diem_sum += entry.per_diem_total;
            travel_sum += entry.travel_cost;

            table.add_row(vec![
                entry.start.clone(),
                entry.end.clone(),
                entry.event_type.as_str().to_string(),
                entry.work_mode.as_str().to_string(),
                entry.remote_type.as_str().to_string(),
                format_money(entry.per_diem_total),
                format_money(entry.travel_cost),
                entry.description.clone(),
            ]);
        }

        if shown == 0 {
            info("No rows for the selected period.");
            return Ok(());
        }

        print!("{}", table.render());
        println!(
            "\nTotals: per-diem {} | travel {}",
            format_money(per_diem_sum),
            format_money(travel_sum)
        );
    }
    Ok(())
}
