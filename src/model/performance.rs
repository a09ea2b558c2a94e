//! Performance rating enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Performance rating attached to every student.
///
/// Serialized with its display label, so `NeedsImprovement` is written as
/// `"Needs Improvement"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    /// All ratings, best first.
    pub const ALL: [Performance; 4] = [
        Performance::Excellent,
        Performance::Good,
        Performance::Average,
        Performance::NeedsImprovement,
    ];

    /// Returns the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Average => "Average",
            Performance::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four rating labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePerformanceError(pub String);

impl fmt::Display for ParsePerformanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown performance rating '{}'", self.0)
    }
}

impl std::error::Error for ParsePerformanceError {}

impl FromStr for Performance {
    type Err = ParsePerformanceError;

    /// Matches a label ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Performance::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePerformanceError(s.to_string()))
    }
}
