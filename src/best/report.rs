use serde::Serialize;

use super::BestMatch;
use crate::report_helpers;
use crate::severity::SeverityBand;

/// Print each file's highest match with its severity band.
pub fn print_report(matches: &[BestMatch]) {
    if matches.is_empty() {
        println!("No similarity pairs found.");
        return;
    }

    let w1 = report_helpers::max_name_width(matches.iter().map(|m| m.file.as_str()), 4);
    let w2 = report_helpers::max_name_width(matches.iter().map(|m| m.matched_with.as_str()), 12);
    let separator = report_helpers::separator((w1 + w2 + 24).max(60));

    println!("Highest Match per File");
    println!("{separator}");
    println!(
        " {:<w1$}  {:<w2$}  {:>10}  Band",
        "File", "Matched With", "Similarity"
    );
    println!("{separator}");
    for m in matches {
        println!(
            " {:<w1$}  {:<w2$}  {:>9.1}%  {}",
            m.file,
            m.matched_with,
            m.similarity,
            SeverityBand::from_score(m.similarity)
        );
    }
    println!("{separator}");
    println!(" {} file(s)", matches.len());
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    matched_with: &'a str,
    similarity: f64,
    severity: SeverityBand,
}

/// Serialize the per-file best matches as pretty-printed JSON to stdout.
pub fn print_json(matches: &[BestMatch]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = matches
        .iter()
        .map(|m| JsonEntry {
            file: &m.file,
            matched_with: &m.matched_with,
            similarity: m.similarity,
            severity: SeverityBand::from_score(m.similarity),
        })
        .collect();

    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
