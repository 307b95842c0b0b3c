//! Table lifecycle: load-or-seed, finalize (derive + sort), persist.

use std::path::Path;

use crate::core::derive::{DeriveReport, derive_all};
use crate::core::rates::Rates;
use crate::core::seeder::seed_timeline;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store;

/// Load the persisted ledger when it exists, otherwise seed the range.
pub fn load_or_seed(path: &Path, from: &str, to: &str) -> AppResult<Vec<Entry>> {
    if path.is_file() {
        store::csv::load_entries(path)
    } else {
        seed_timeline(from, to)
    }
}

/// Run the derivation engine over every row, then sort.
///
/// The caller owns replacing its state with the returned collection.
pub fn finalize(entries: Vec<Entry>, rates: &Rates) -> (Vec<Entry>, DeriveReport) {
    let (mut entries, report) = derive_all(entries, rates);
    sort_entries(&mut entries);
    (entries, report)
}

/// Stable sort by start ascending; work and free rows precede travel
/// rows sharing the same start. ISO timestamps compare correctly as
/// plain strings, and unparsable stamps keep a deterministic place.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.event_type.sort_rank().cmp(&b.event_type.sort_rank()))
    });
}

/// Full overwrite of the destination file.
pub fn persist(entries: &[Entry], path: &Path) -> AppResult<()> {
    store::csv::write_entries(path, entries)
}
