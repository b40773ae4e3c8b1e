//! Each file's single highest match (`sr best`).

mod report;

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::records::{self, SimilarityRecord};

/// A file paired with its highest-scoring counterpart.
pub struct BestMatch {
    pub file: String,
    pub matched_with: String,
    pub similarity: f64,
}

/// For every file (either column), keep its highest-scoring counterpart.
///
/// Ties keep the pair encountered first. The result is sorted descending
/// by similarity; the sort is stable, so tied files stay in first-seen
/// order.
pub fn best_matches(records: &[SimilarityRecord]) -> Vec<BestMatch> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, (String, f64)> = HashMap::new();

    for record in records {
        for (file, other) in [
            (&record.file1, &record.file2),
            (&record.file2, &record.file1),
        ] {
            match best.get_mut(file.as_str()) {
                Some(entry) => {
                    if record.similarity > entry.1 {
                        *entry = (other.clone(), record.similarity);
                    }
                }
                None => {
                    order.push(file.clone());
                    best.insert(file.clone(), (other.clone(), record.similarity));
                }
            }
        }
    }

    let mut results: Vec<BestMatch> = order
        .into_iter()
        .filter_map(|file| {
            best.remove(&file).map(|(matched_with, similarity)| BestMatch {
                file,
                matched_with,
                similarity,
            })
        })
        .collect();

    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results
}

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let all = records::load_csv(path)?;
    let matches = best_matches(&all);

    if json {
        report::print_json(&matches)?;
    } else {
        report::print_report(&matches);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
