//! Answer counting.

use std::collections::BTreeMap;

use serde::Serialize;
use survey_ingest::NO_ANSWER;
use survey_model::{AgeBand, NormalizedRecord, RawRecord};
use survey_normalization::Dimension;

/// Counts non-blank values.
pub fn count_by<'a, I>(values: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Orders counts by descending count, then by label.
pub fn sorted_counts(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // BTreeMap iteration is label-ordered and the sort is stable.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Rounded percentage of `n` over `total`; zero when `total` is zero.
pub fn pct(n: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = n as f64 / total as f64 * 100.0;
    ratio.round() as u32
}

/// One row of a dimension summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
    pub percent: u32,
}

/// Answer distribution of one question over a set of respondents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSummary {
    pub name: String,
    /// Number of respondents the percentages are relative to.
    pub respondents: usize,
    pub rows: Vec<CountRow>,
}

impl DimensionSummary {
    fn from_counts(name: &str, respondents: usize, entries: Vec<(String, usize)>) -> Self {
        let rows = entries
            .into_iter()
            .map(|(label, count)| CountRow {
                percent: pct(count, respondents),
                label,
                count,
            })
            .collect();
        Self {
            name: name.to_string(),
            respondents,
            rows,
        }
    }
}

/// Summarizes one question using normalized labels, keeping unrecognised
/// answers verbatim. The `-` token of a list answer is not counted.
pub fn summarize(records: &[RawRecord], dimension: Dimension) -> DimensionSummary {
    let values: Vec<String> = records
        .iter()
        .flat_map(|record| dimension.values(record))
        .filter(|value| !(dimension.is_multi_valued() && value == NO_ANSWER))
        .collect();
    let counts = count_by(values.iter().map(String::as_str));
    DimensionSummary::from_counts(dimension.as_str(), records.len(), sorted_counts(counts))
}

/// Summarizes age bands in band order, including empty bands.
pub fn summarize_age_bands(records: &[NormalizedRecord]) -> DimensionSummary {
    let entries = AgeBand::ALL
        .iter()
        .map(|band| {
            let count = records
                .iter()
                .filter(|record| record.age_band == Some(*band))
                .count();
            (band.as_str().to_string(), count)
        })
        .collect();
    DimensionSummary::from_counts("age_band", records.len(), entries)
}
