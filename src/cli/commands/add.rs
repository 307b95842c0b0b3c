use std::io;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rates::Rates;
use crate::core::wizard::run_wizard;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Guided entry: prompt for one row and append it to the reduced-schema
/// guided CSV. This path never touches the canonical ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { file } = cmd {
        let out = file.clone().unwrap_or_else(|| cfg.guided_ledger.clone());
        let path = expand_tilde(&out);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rates = Rates::from_config(cfg);
        let stdin = io::stdin();
        let entry = run_wizard(stdin.lock(), &rates)?;

        store::csv::append_guided(&path, &entry)?;

        success(format!("Entry appended to {}", path.display()));
    }
    Ok(())
}
