use serde::Serialize;

use super::SummaryStats;
use crate::report_helpers;

/// Print the summary block: file and pair counts, highest match, and the
/// number of pairs in the high severity band.
pub fn print_report(stats: &SummaryStats) {
    let separator = report_helpers::separator(50);

    println!("{separator}");
    println!(" Similarity Summary");
    println!();
    println!(" Files compared:       {:>26}", stats.total_files);
    println!(" Pairs compared:       {:>26}", stats.total_pairs);
    match stats.max_similarity {
        Some(max) => println!(" Highest similarity:   {:>25.1}%", max),
        None => println!(" Highest similarity:   {:>26}", "-"),
    }
    println!(" High pairs (>= 80%):  {:>26}", stats.high_pairs);
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonOutput {
    total_files: usize,
    total_pairs: usize,
    max_similarity: Option<f64>,
    high_pairs: usize,
}

/// Serialize the summary as pretty-printed JSON to stdout.
pub fn print_json(stats: &SummaryStats) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonOutput {
        total_files: stats.total_files,
        total_pairs: stats.total_pairs,
        max_similarity: stats.max_similarity,
        high_pairs: stats.high_pairs,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
