//! Severity bands for similarity scores.
//!
//! Cutoffs are fixed display constants, independent of the user-chosen
//! filter threshold: >= 80 high (red), 50-79 medium (amber), below 50
//! low (green).

use serde::Serialize;

/// Traffic-light classification of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    High,
    Medium,
    Low,
}

impl SeverityBand {
    /// Classify a validated score into its severity band.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Label used in reports and as the badge CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "severity_test.rs"]
mod tests;
