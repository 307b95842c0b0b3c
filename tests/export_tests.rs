use predicates::str::contains;
use std::fs;

mod common;
use common::{pdm, recalc_fixed_rates, setup_ledger, temp_out, write_ledger};

#[test]
fn test_export_csv_uses_canonical_header() {
    let ledger = setup_ledger("export_csv");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,work,remote,domestic,0,0,0,0,0,"],
    );
    recalc_fixed_rates(&ledger);

    let out = temp_out("export_csv", "csv");

    pdm()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(common::HEADER));
    assert!(content.contains("Remote work (domestic) from 2025-06-01 to 2025-06-01"));
}

#[test]
fn test_export_json_contains_derived_fields() {
    let ledger = setup_ledger("export_json");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,Quiet day"],
    );
    recalc_fixed_rates(&ledger);

    let out = temp_out("export_json", "json");

    pdm()
        .args([
            "--ledger", &ledger, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"event_type\": \"free\""));
    assert!(content.contains("\"description\": \"Quiet day\""));
    assert!(content.contains("\"per_diem_total\": 0.0"));
}

#[test]
fn test_export_requires_absolute_path() {
    let ledger = setup_ledger("export_relative");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,"],
    );

    pdm()
        .args([
            "--ledger",
            &ledger,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_fails_without_ledger() {
    let ledger = setup_ledger("export_no_ledger");
    let out = temp_out("export_no_ledger", "csv");

    pdm()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("No ledger"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let ledger = setup_ledger("export_confirm");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,"],
    );

    let out = temp_out("export_confirm", "csv");
    fs::write(&out, "old data\n").expect("write existing file");

    pdm()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read out"), "old data\n");

    pdm()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read out");
    assert!(content.starts_with(common::HEADER));
}
