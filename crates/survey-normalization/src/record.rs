//! Record-level normalization.

use survey_ingest::{IngestOptions, parse_with_options};
use survey_model::{GenderLabel, NormalizedRecord, RawRecord, RelationshipLabel};
use tracing::debug;

use crate::normalization::{age_band, normalize_gender, normalize_relationship};

/// Attaches the demographic labels to a record.
///
/// A blank gender or relationship answer is reported as `Altre`.
pub fn normalize_record(raw: &RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        gender: normalize_gender(Some(&raw.gender)).unwrap_or(GenderLabel::Other),
        relationship: normalize_relationship(Some(&raw.relationship))
            .unwrap_or(RelationshipLabel::Other),
        age_band: age_band(raw.age),
        raw: raw.clone(),
    }
}

pub fn normalize_records(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> = records.iter().map(normalize_record).collect();
    debug!(records = normalized.len(), "normalized records");
    normalized
}

/// Parses raw survey text and normalizes every accepted record.
pub fn parse_normalized(raw_text: &str) -> Vec<NormalizedRecord> {
    let outcome = parse_with_options(raw_text, &IngestOptions::default());
    normalize_records(&outcome.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::AgeBand;

    #[test]
    fn test_normalize_record() {
        let raw = RawRecord {
            age: Some(33),
            gender: "Dona".to_string(),
            relationship: "Parella oberta".to_string(),
            ..RawRecord::new(4)
        };
        let normalized = normalize_record(&raw);
        assert_eq!(normalized.id(), 4);
        assert_eq!(normalized.gender, GenderLabel::Woman);
        assert_eq!(normalized.relationship, RelationshipLabel::OpenCouple);
        assert_eq!(normalized.age_band, Some(AgeBand::From31To35));
        assert_eq!(normalized.raw, raw);
    }

    #[test]
    fn test_blank_demographics_fall_back_to_other() {
        let normalized = normalize_record(&RawRecord::new(9));
        assert_eq!(normalized.gender, GenderLabel::Other);
        assert_eq!(normalized.relationship, RelationshipLabel::Other);
        assert_eq!(normalized.age_band, None);
    }
}
