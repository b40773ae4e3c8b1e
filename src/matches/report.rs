use serde::Serialize;

use super::index::FileMatches;
use crate::report_helpers;
use crate::severity::SeverityBand;

/// Print one block per file: the file name, then its matches as
/// `other  score%  band` lines in descending score order.
pub fn print_report(index: &[FileMatches], threshold: u8) {
    if index.is_empty() {
        println!("No pairs at or above {threshold}% similarity.");
        return;
    }

    let width = report_helpers::max_name_width(
        index
            .iter()
            .flat_map(|entry| entry.matches.iter().map(|m| m.file.as_str())),
        4,
    );
    let separator = report_helpers::separator((width + 24).max(60));

    println!("Similarity Matches (threshold {threshold}%)");
    println!("{separator}");

    for entry in index {
        println!();
        println!(" {}", entry.file);
        for m in &entry.matches {
            println!(
                "   {:<width$}  {:>6.1}%  {}",
                m.file,
                m.similarity,
                SeverityBand::from_score(m.similarity),
            );
        }
    }

    println!();
    println!("{separator}");
    println!(" {} file(s) with matches", index.len());
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    file: &'a str,
    similarity: f64,
    severity: SeverityBand,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    matches: Vec<JsonMatch<'a>>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    threshold: u8,
    files: Vec<JsonEntry<'a>>,
}

/// Print the match index as pretty-printed JSON to stdout.
pub fn print_json(index: &[FileMatches], threshold: u8) -> Result<(), Box<dyn std::error::Error>> {
    let files = index
        .iter()
        .map(|entry| JsonEntry {
            file: &entry.file,
            matches: entry
                .matches
                .iter()
                .map(|m| JsonMatch {
                    file: &m.file,
                    similarity: m.similarity,
                    severity: SeverityBand::from_score(m.similarity),
                })
                .collect(),
        })
        .collect();

    report_helpers::print_json_stdout(&JsonOutput { threshold, files })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
