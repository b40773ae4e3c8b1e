//! Top-N most similar pairs (`sr top`).

mod report;

use std::error::Error;
use std::path::Path;

use crate::records::{self, SimilarityRecord};

/// Sort pairs descending by similarity and keep the first `count`.
/// The sort is stable, so equal scores keep input order.
pub fn top_pairs(records: &[SimilarityRecord], count: usize) -> Vec<SimilarityRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    sorted.truncate(count);
    sorted
}

pub fn run(path: &Path, count: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let pairs = top_pairs(&all, count);

    if json {
        report::print_json(&pairs)?;
    } else {
        report::print_report(&pairs, all.len());
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
