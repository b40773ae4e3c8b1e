use serde::Serialize;

use crate::ranges::SimilarityRange;
use crate::report_helpers;

/// Print the five fixed buckets in ascending order with a totals row.
/// Zero-count buckets are kept so the table shape is stable.
pub fn print_report(counts: &[usize; 5]) {
    let total: usize = counts.iter().sum();
    let separator = report_helpers::separator(40);

    println!("Similarity Distribution");
    println!("{separator}");
    println!(" {:<10} {:>8}", "Range", "Pairs");
    println!("{separator}");
    for (range, count) in SimilarityRange::ALL.iter().zip(counts) {
        println!(" {:<10} {:>8}", range.label(), count);
    }
    println!("{separator}");
    println!(" {:<10} {:>8}", "Total", total);
}

/// Per-bucket count for the JSON output.
#[derive(Serialize)]
struct JsonEntry {
    range: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct JsonOutput {
    total_pairs: usize,
    ranges: Vec<JsonEntry>,
}

/// Serialize the distribution as pretty-printed JSON to stdout.
pub fn print_json(counts: &[usize; 5]) -> Result<(), Box<dyn std::error::Error>> {
    let ranges = SimilarityRange::ALL
        .iter()
        .zip(counts)
        .map(|(range, &count)| JsonEntry {
            range: range.label(),
            count,
        })
        .collect();

    report_helpers::print_json_stdout(&JsonOutput {
        total_pairs: counts.iter().sum(),
        ranges,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
