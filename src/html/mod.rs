//! Self-contained HTML report (`sr html`).
//!
//! One badge block per file with matches at or above the threshold,
//! summary cards, and a pie chart of the full-table score distribution.
//! Everything is inlined (CSS and SVG); the file works offline.

mod chart;
mod render;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::matches::{build_match_index, filter_by_threshold};
use crate::ranges;
use crate::records;
use crate::summary;

pub fn run(path: &Path, threshold: u8, out: &Path) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let filtered = filter_by_threshold(&all, threshold);
    let index = build_match_index(&filtered);
    let counts = ranges::range_counts(&all);
    let stats = summary::compute(&all);

    let page = render::render_page(&path.display().to_string(), threshold, &stats, &index, &counts);
    fs::write(out, page).map_err(|e| format!("{}: {e}", out.display()))?;

    println!("Wrote similarity report to {}", out.display());
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
