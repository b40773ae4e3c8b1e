//! Score distribution over the full results table (`sr dist`).

mod report;

use std::error::Error;
use std::path::Path;

use crate::ranges;
use crate::records;

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let counts = ranges::range_counts(&all);

    if json {
        report::print_json(&counts)?;
    } else {
        report::print_report(&counts);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
