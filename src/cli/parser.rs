use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for perdiem
/// CLI application to manage a daily travel/work allowance ledger
#[derive(Parser)]
#[command(
    name = "perdiem",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily allowance ledger CLI: seed a timeline, derive per-diem and mileage amounts, save to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override ledger CSV path (useful for tests or a custom ledger)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Generate the placeholder timeline for a date range
    Seed {
        #[arg(
            long,
            value_name = "DATE",
            help = "Range start (YYYY-MM-DD); defaults to the configured from_date"
        )]
        from: Option<String>,

        #[arg(
            long,
            value_name = "DATE",
            help = "Range end (YYYY-MM-DD); defaults to the configured to_date"
        )]
        to: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing ledger without asking")]
        force: bool,
    },

    /// Recompute derived fields for every row, sort and save
    Recalc {
        #[arg(
            long,
            value_name = "DATE",
            help = "Seeding range start, used when the ledger does not exist yet"
        )]
        from: Option<String>,

        #[arg(
            long,
            value_name = "DATE",
            help = "Seeding range end, used when the ledger does not exist yet"
        )]
        to: Option<String>,

        #[arg(
            long = "inland-rate",
            value_name = "RATE",
            help = "Per-diem for domestic remote work (per day)"
        )]
        inland_rate: Option<f64>,

        #[arg(
            long = "foreign-rate",
            value_name = "RATE",
            help = "Per-diem for foreign remote work (per day)"
        )]
        foreign_rate: Option<f64>,

        #[arg(
            long = "km-rate",
            value_name = "RATE",
            help = "Reimbursement per travelled kilometer"
        )]
        km_rate: Option<f64>,
    },

    /// List ledger rows
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Add one entry through guided prompts (writes a separate reduced-schema CSV)
    Add {
        #[arg(
            long,
            value_name = "FILE",
            help = "Output CSV for guided entries; defaults to the configured path"
        )]
        file: Option<String>,
    },

    /// Export the derived ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
