use predicates::str::contains;
use std::fs;

mod common;
use common::{pdm, setup_ledger};

#[test]
fn test_seed_three_days() {
    let ledger = setup_ledger("seed_three_days");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-03",
        ])
        .assert()
        .success()
        .stdout(contains("Seeded 3 placeholder days"));

    let content = fs::read_to_string(&ledger).expect("read seeded ledger");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 rows
    assert!(lines[0].starts_with("Start,End,Event_Type"));
    assert!(content.contains(
        "2025-06-01T00:00,2025-06-01T23:59,free,free,n/a,0,0,0,0,0,Free from 2025-06-01T00:00 to 2025-06-01T23:59"
    ));
    assert!(content.contains("2025-06-02T00:00"));
    assert!(content.contains("2025-06-03T00:00"));
}

#[test]
fn test_seed_reversed_range_is_empty() {
    let ledger = setup_ledger("seed_reversed");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "2025-06-05",
            "--to",
            "2025-06-01",
        ])
        .assert()
        .success()
        .stdout(contains("Seeded 0 placeholder days"));

    let content = fs::read_to_string(&ledger).expect("read seeded ledger");
    assert_eq!(content.lines().count(), 1); // header only
}

#[test]
fn test_seed_invalid_from_date_fails() {
    let ledger = setup_ledger("seed_invalid_from");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "junk",
            "--to",
            "2025-06-03",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(!std::path::Path::new(&ledger).exists());
}

#[test]
fn test_seed_invalid_to_date_fails() {
    let ledger = setup_ledger("seed_invalid_to");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "2025-06-01",
            "--to",
            "2025-13-99",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_seed_existing_ledger_needs_confirmation() {
    let ledger = setup_ledger("seed_confirm");
    fs::write(&ledger, "placeholder\n").expect("write existing file");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-03",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    let content = fs::read_to_string(&ledger).expect("read ledger");
    assert_eq!(content, "placeholder\n");
}

#[test]
fn test_seed_force_overwrites() {
    let ledger = setup_ledger("seed_force");
    fs::write(&ledger, "placeholder\n").expect("write existing file");

    pdm()
        .args([
            "--ledger",
            &ledger,
            "seed",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-02",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&ledger).expect("read ledger");
    assert!(content.starts_with("Start,End,Event_Type"));
    assert_eq!(content.lines().count(), 3);
}
