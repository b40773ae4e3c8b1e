//! Ingestion boundary for similarity results.
//!
//! The comparison stage writes `File 1,File 2,Similarity %` rows. Records
//! are validated once here (non-empty names, finite score in 0-100); all
//! downstream views assume validated records and never mutate them.

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One pairwise comparison result from the similarity stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRecord {
    #[serde(rename = "File 1")]
    pub file1: String,
    #[serde(rename = "File 2")]
    pub file2: String,
    #[serde(rename = "Similarity %")]
    pub similarity: f64,
}

fn validate(record: &SimilarityRecord) -> Result<(), String> {
    if record.file1.trim().is_empty() || record.file2.trim().is_empty() {
        return Err("empty file name".to_string());
    }
    if !record.similarity.is_finite() || !(0.0..=100.0).contains(&record.similarity) {
        return Err(format!(
            "similarity {} outside the 0-100 range",
            record.similarity
        ));
    }
    Ok(())
}

/// Load and validate the results CSV.
///
/// Line numbers in validation errors count the header as line 1, matching
/// what an editor shows.
pub fn load_csv(path: &Path) -> Result<Vec<SimilarityRecord>, Box<dyn Error>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| format!("{}: {e}", path.display()))?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        let record: SimilarityRecord = row.map_err(|e| format!("{}: {e}", path.display()))?;
        validate(&record).map_err(|e| format!("{}: line {}: {e}", path.display(), i + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Write records with the same header the comparison stage uses, so
/// exported subsets can be fed back through any consumer of the format.
pub fn write_csv(path: &Path, records: &[SimilarityRecord]) -> Result<(), Box<dyn Error>> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("{}: {e}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
