//! Configuration options for survey ingestion.

use serde::{Deserialize, Serialize};

use crate::csv::DEFAULT_DELIMITER;

/// Number of leading physical lines occupied by the export header.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Inclusive bounds for a plausible respondent age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
}

impl AgeRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: i32) -> bool {
        self.min <= age && age <= self.max
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 16, max: 100 }
    }
}

/// Options for parsing a survey export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Field delimiter used by the tokenizer and the record-start predicate.
    pub delimiter: char,
    /// Leading non-blank lines skipped unconditionally.
    pub header_lines: usize,
    /// Ages outside this range drop the record.
    pub age_range: AgeRange,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header_lines: DEFAULT_HEADER_LINES,
            age_range: AgeRange::default(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    #[must_use]
    pub fn with_age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = age_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IngestOptions::default();
        assert_eq!(options.delimiter, ';');
        assert_eq!(options.header_lines, 2);
        assert_eq!(options.age_range, AgeRange::new(16, 100));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let range = AgeRange::default();
        assert!(range.contains(16));
        assert!(range.contains(100));
        assert!(!range.contains(15));
        assert!(!range.contains(101));
    }
}
