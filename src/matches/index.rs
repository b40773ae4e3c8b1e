use std::collections::HashMap;

use crate::records::SimilarityRecord;

/// One entry in a file's match list: the other file and the pair's score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub file: String,
    pub similarity: f64,
}

/// A file and its matches, sorted descending by score.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMatches {
    pub file: String,
    pub matches: Vec<Match>,
}

/// Keep pairs at or above the threshold, preserving input order.
pub fn filter_by_threshold(records: &[SimilarityRecord], threshold: u8) -> Vec<SimilarityRecord> {
    records
        .iter()
        .filter(|r| r.similarity >= f64::from(threshold))
        .cloned()
        .collect()
}

/// Position of `file` in the index, appending a fresh entry on first sight.
fn slot(index: &mut Vec<FileMatches>, slots: &mut HashMap<String, usize>, file: &str) -> usize {
    if let Some(&i) = slots.get(file) {
        return i;
    }
    index.push(FileMatches {
        file: file.to_string(),
        matches: Vec::new(),
    });
    slots.insert(file.to_string(), index.len() - 1);
    index.len() - 1
}

/// Build the per-file match index from the filtered record set.
///
/// Every record contributes under both of its files, so the index is
/// symmetric: if A lists B with score S, B lists A with the same S.
/// File order is first-seen order in the record sequence; each match
/// list is sorted descending by score. The sort is stable, so equal
/// scores keep insertion order.
pub fn build_match_index(records: &[SimilarityRecord]) -> Vec<FileMatches> {
    let mut index: Vec<FileMatches> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let a = slot(&mut index, &mut slots, &record.file1);
        index[a].matches.push(Match {
            file: record.file2.clone(),
            similarity: record.similarity,
        });

        let b = slot(&mut index, &mut slots, &record.file2);
        index[b].matches.push(Match {
            file: record.file1.clone(),
            similarity: record.similarity,
        });
    }

    for entry in &mut index {
        entry
            .matches
            .sort_by(|x, y| y.similarity.total_cmp(&x.similarity));
    }

    index
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
