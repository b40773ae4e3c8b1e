use serde::Serialize;

use crate::records::SimilarityRecord;
use crate::report_helpers;

/// Print the top pairs as a ranked table, noting truncation when more
/// pairs exist than are shown.
pub fn print_report(pairs: &[SimilarityRecord], total: usize) {
    if pairs.is_empty() {
        println!("No similarity pairs found.");
        return;
    }

    let w1 = report_helpers::max_name_width(pairs.iter().map(|p| p.file1.as_str()), 6);
    let w2 = report_helpers::max_name_width(pairs.iter().map(|p| p.file2.as_str()), 6);
    let separator = report_helpers::separator((w1 + w2 + 20).max(60));

    println!("Top Similar Pairs");
    println!("{separator}");
    println!(
        " {:>3}  {:<w1$}  {:<w2$}  {:>10}",
        "#", "File 1", "File 2", "Similarity"
    );
    println!("{separator}");
    for (i, pair) in pairs.iter().enumerate() {
        println!(
            " {:>3}  {:<w1$}  {:<w2$}  {:>9.1}%",
            i + 1,
            pair.file1,
            pair.file2,
            pair.similarity
        );
    }
    println!("{separator}");

    if pairs.len() < total {
        println!(" Showing top {} of {} pairs.", pairs.len(), total);
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file1: &'a str,
    file2: &'a str,
    similarity: f64,
}

/// Serialize the top pairs as pretty-printed JSON to stdout.
pub fn print_json(pairs: &[SimilarityRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = pairs
        .iter()
        .map(|p| JsonEntry {
            file1: &p.file1,
            file2: &p.file2,
            similarity: p.similarity,
        })
        .collect();

    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
