//! Headline statistics for a results table (`sr summary`).

mod report;

use std::collections::HashSet;
use std::error::Error;
use std::path::Path;

use crate::records::{self, SimilarityRecord};
use crate::severity::SeverityBand;

/// Headline numbers derived from the full record set.
pub struct SummaryStats {
    pub total_files: usize,
    pub total_pairs: usize,
    /// `None` for an empty table.
    pub max_similarity: Option<f64>,
    /// Pairs in the `high` severity band (>= 80%).
    pub high_pairs: usize,
}

pub fn compute(records: &[SimilarityRecord]) -> SummaryStats {
    let files: HashSet<&str> = records
        .iter()
        .flat_map(|r| [r.file1.as_str(), r.file2.as_str()])
        .collect();

    let max_similarity = records.iter().map(|r| r.similarity).reduce(f64::max);
    let high_pairs = records
        .iter()
        .filter(|r| SeverityBand::from_score(r.similarity) == SeverityBand::High)
        .count();

    SummaryStats {
        total_files: files.len(),
        total_pairs: records.len(),
        max_similarity,
        high_pairs,
    }
}

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let stats = compute(&all);

    if json {
        report::print_json(&stats)?;
    } else {
        report::print_report(&stats);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
