use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger;
use crate::core::seeder::seed_timeline;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Generate the placeholder timeline and write it as the ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { from, to, force } = cmd {
        let ledger_path = expand_tilde(&cfg.ledger);
        let from = from.clone().unwrap_or_else(|| cfg.from_date.clone());
        let to = to.clone().unwrap_or_else(|| cfg.to_date.clone());

        // Validate the range bounds before touching the destination.
        let entries = seed_timeline(&from, &to)?;

        ensure_writable(&ledger_path, *force)?;
        if let Some(parent) = ledger_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        ledger::persist(&entries, &ledger_path)?;

        success(format!(
            "Seeded {} placeholder days ({} to {}) into {}",
            entries.len(),
            from,
            to,
            ledger_path.display()
        ));
    }
    Ok(())
}
