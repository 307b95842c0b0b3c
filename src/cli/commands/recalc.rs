use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger;
use crate::core::rates::Rates;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// The main pipeline: load-or-seed, derive every row, sort, save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recalc {
        from,
        to,
        inland_rate,
        foreign_rate,
        km_rate,
    } = cmd
    {
        let ledger_path = expand_tilde(&cfg.ledger);
        let from = from.clone().unwrap_or_else(|| cfg.from_date.clone());
        let to = to.clone().unwrap_or_else(|| cfg.to_date.clone());

        let mut rates = Rates::from_config(cfg);
        if let Some(r) = inland_rate {
            rates.inland_rate = *r;
        }
        if let Some(r) = foreign_rate {
            rates.foreign_rate = *r;
        }
        if let Some(r) = km_rate {
            rates.km_rate = *r;
        }

        let entries = ledger::load_or_seed(&ledger_path, &from, &to)?;
        let (entries, report) = ledger::finalize(entries, &rates);

        for skip in &report.skipped {
            warning(format!(
                "Row {} left unchanged: {}",
                skip.index + 1,
                skip.reason
            ));
        }

        if let Some(parent) = ledger_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        ledger::persist(&entries, &ledger_path)?;

        success(format!(
            "Recalculated {} rows ({} skipped), saved to {}",
            report.derived,
            report.skipped.len(),
            ledger_path.display()
        ));
    }
    Ok(())
}
