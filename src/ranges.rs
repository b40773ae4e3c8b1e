//! Fixed similarity buckets for distribution reporting.
//!
//! Bucket edges are lowest-bound-inclusive: `[0,20] (20,40] (40,60]
//! (60,80] (80,100]`, so 20 falls in "0-20%" and 80 in "61-80%". Every
//! validated score maps to exactly one bucket.

use serde::Serialize;

use crate::records::SimilarityRecord;

/// One of the five 20-point score buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityRange {
    #[serde(rename = "0-20%")]
    UpTo20,
    #[serde(rename = "21-40%")]
    UpTo40,
    #[serde(rename = "41-60%")]
    UpTo60,
    #[serde(rename = "61-80%")]
    UpTo80,
    #[serde(rename = "81-100%")]
    UpTo100,
}

impl SimilarityRange {
    /// All buckets in ascending score order, the fixed display order.
    pub const ALL: [SimilarityRange; 5] = [
        Self::UpTo20,
        Self::UpTo40,
        Self::UpTo60,
        Self::UpTo80,
        Self::UpTo100,
    ];

    /// Classify a validated score into its bucket.
    pub fn from_score(score: f64) -> Self {
        if score <= 20.0 {
            Self::UpTo20
        } else if score <= 40.0 {
            Self::UpTo40
        } else if score <= 60.0 {
            Self::UpTo60
        } else if score <= 80.0 {
            Self::UpTo80
        } else {
            Self::UpTo100
        }
    }

    /// Display label, matching the upstream dashboard's bucket names.
    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo20 => "0-20%",
            Self::UpTo40 => "21-40%",
            Self::UpTo60 => "41-60%",
            Self::UpTo80 => "61-80%",
            Self::UpTo100 => "81-100%",
        }
    }
}

impl std::fmt::Display for SimilarityRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Count records per bucket, in `SimilarityRange::ALL` order.
///
/// Always runs over the full (unfiltered) table; zero counts are kept so
/// the distribution shape is stable.
pub fn range_counts(records: &[SimilarityRecord]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for record in records {
        counts[SimilarityRange::from_score(record.similarity) as usize] += 1;
    }
    counts
}

#[cfg(test)]
#[path = "ranges_test.rs"]
mod tests;
