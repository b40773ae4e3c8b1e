//! Per-file similarity matches (`sr matches`).
//!
//! Filters pairs by the similarity threshold, builds the symmetric
//! per-file match index, and prints one block per file. The index is
//! rebuilt from the filtered set only, so files with no surviving match
//! are omitted entirely.

mod index;
mod report;

use std::error::Error;
use std::path::Path;

use crate::records;

pub use index::{FileMatches, Match, build_match_index, filter_by_threshold};

pub fn run(
    path: &Path,
    threshold: u8,
    file: Option<&str>,
    export: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let filtered = filter_by_threshold(&all, threshold);

    if let Some(out) = export {
        records::write_csv(out, &filtered)?;
        if !json {
            println!(
                "Exported {} filtered pair(s) to {}",
                filtered.len(),
                out.display()
            );
            println!();
        }
    }

    let mut matched = build_match_index(&filtered);
    if let Some(name) = file {
        matched.retain(|entry| entry.file == name);
    }

    if json {
        report::print_json(&matched, threshold)?;
    } else {
        report::print_report(&matched, threshold);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
