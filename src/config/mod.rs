use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::utils::date::today;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Canonical ledger CSV path.
    pub ledger: String,
    #[serde(default = "default_inland_rate")]
    pub inland_rate: f64,
    #[serde(default = "default_foreign_rate")]
    pub foreign_rate: f64,
    #[serde(default = "default_km_rate")]
    pub km_rate: f64,
    /// Default seeding range (YYYY-MM-DD), current month when absent.
    #[serde(default = "default_from_date")]
    pub from_date: String,
    #[serde(default = "default_to_date")]
    pub to_date: String,
    /// Output of the guided `add` entry path. Separate file, reduced
    /// column set; never merged into the canonical ledger.
    #[serde(default = "default_guided_ledger")]
    pub guided_ledger: String,
}

fn default_inland_rate() -> f64 {
    14.0
}
fn default_foreign_rate() -> f64 {
    28.0
}
fn default_km_rate() -> f64 {
    0.30
}

fn default_from_date() -> String {
    let now = today();
    format!("{:04}-{:02}-01", now.year(), now.month())
}

fn default_to_date() -> String {
    let now = today();
    let (y, m) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    let next_first = chrono::NaiveDate::from_ymd_opt(y, m, 1).unwrap();
    next_first.pred_opt().unwrap().format("%Y-%m-%d").to_string()
}

fn default_guided_ledger() -> String {
    Config::config_dir()
        .join("guided_entries.csv")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: Self::ledger_file().to_string_lossy().to_string(),
            inland_rate: default_inland_rate(),
            foreign_rate: default_foreign_rate(),
            km_rate: default_km_rate(),
            from_date: default_from_date(),
            to_date: default_to_date(),
            guided_ledger: default_guided_ledger(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("perdiem")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".perdiem")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("perdiem.conf")
    }

    /// Return the default path of the ledger CSV
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("allowance_ledger.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(custom_ledger: Option<String>) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let ledger_path = if let Some(name) = custom_ledger {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::ledger_file()
        };

        let config = Config {
            ledger: ledger_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        println!("✅ Config file: {:?}", Self::config_file());
        println!("✅ Ledger:      {:?}", ledger_path);

        Ok(())
    }
}
