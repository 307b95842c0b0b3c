use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default rates and date range
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing perdiem…");

    if let Some(custom) = &cli.ledger {
        Config::init_all(Some(custom.clone()))?;
    } else {
        Config::init_all(None)?;
    }

    println!("🎉 perdiem initialization completed!");
    Ok(())
}
