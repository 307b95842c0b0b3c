use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{pdm, recalc_fixed_rates, setup_ledger, write_ledger};

#[test]
fn test_list_shows_rows_and_totals() {
    let ledger = setup_ledger("list_rows");
    write_ledger(
        &ledger,
        &[
            "2025-06-01,2025-06-01,work,remote,domestic,0,0,0,0,0,",
            "2025-06-02,2025-06-02,travel,,,0,0,15.5,0,0,",
        ],
    );
    recalc_fixed_rates(&ledger);

    pdm()
        .args(["--ledger", &ledger, "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-01"))
        .stdout(contains("Remote work (domestic)"))
        .stdout(contains("Travel on 2025-06-02 covering 15.5 km"))
        .stdout(contains("Totals: per-diem 14.00 | travel 4.65"));
}

#[test]
fn test_list_filters_by_period() {
    let ledger = setup_ledger("list_period");
    write_ledger(
        &ledger,
        &[
            "2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,June row",
            "2025-07-01,2025-07-01,free,free,n/a,0,0,0,0,0,July row",
        ],
    );

    pdm()
        .args(["--ledger", &ledger, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("June row"))
        .stdout(contains("July row").not());
}

#[test]
fn test_list_period_range() {
    let ledger = setup_ledger("list_period_range");
    write_ledger(
        &ledger,
        &[
            "2025-05-31,2025-05-31,free,free,n/a,0,0,0,0,0,May row",
            "2025-06-15,2025-06-15,free,free,n/a,0,0,0,0,0,June row",
            "2025-08-01,2025-08-01,free,free,n/a,0,0,0,0,0,August row",
        ],
    );

    pdm()
        .args(["--ledger", &ledger, "list", "--period", "2025-05:2025-07"])
        .assert()
        .success()
        .stdout(contains("May row"))
        .stdout(contains("June row"))
        .stdout(contains("August row").not());
}

#[test]
fn test_list_rejects_bad_period() {
    let ledger = setup_ledger("list_bad_period");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,"],
    );

    pdm()
        .args(["--ledger", &ledger, "list", "--period", "junk"])
        .assert()
        .failure()
        .stderr(contains("Invalid period expression"));
}

#[test]
fn test_list_without_ledger_hints_at_seed() {
    let ledger = setup_ledger("list_no_ledger");

    pdm()
        .args(["--ledger", &ledger, "list"])
        .assert()
        .success()
        .stdout(contains("No ledger at"));
}

#[test]
fn test_list_empty_period_selection() {
    let ledger = setup_ledger("list_empty_period");
    write_ledger(
        &ledger,
        &["2025-06-01,2025-06-01,free,free,n/a,0,0,0,0,0,"],
    );

    pdm()
        .args(["--ledger", &ledger, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No rows for the selected period."));
}
