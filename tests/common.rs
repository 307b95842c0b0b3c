#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pdm() -> Command {
    cargo_bin_cmd!("perdiem")
}

/// Canonical ledger header, used by fixtures and assertions.
pub const HEADER: &str = "Start,End,Event_Type,Work_Mode,Remote_Type,Per_Diem_Rate,Km_Rate,Distance_km,Per_Diem_Total,Travel_Cost,Description";

/// Create a unique ledger path inside the system temp dir and remove any existing file
pub fn setup_ledger(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_perdiem.csv", name));
    let ledger = path.to_string_lossy().to_string();
    fs::remove_file(&ledger).ok();
    ledger
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a ledger fixture with the canonical header and the given raw rows
pub fn write_ledger(path: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(path, content).expect("write ledger fixture");
}

/// Recalculate with fixed rates so assertions don't depend on any
/// configuration file present on the machine.
pub fn recalc_fixed_rates(ledger: &str) {
    pdm()
        .args([
            "--ledger",
            ledger,
            "recalc",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-01",
            "--inland-rate",
            "14.0",
            "--foreign-rate",
            "28.0",
            "--km-rate",
            "0.30",
        ])
        .assert()
        .success();
}
