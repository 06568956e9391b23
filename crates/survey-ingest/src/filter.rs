//! Validity filtering of mapped records.

use survey_model::RawRecord;
use tracing::debug;

use crate::options::AgeRange;

/// A record is valid when its age is unknown or inside `range`.
///
/// Unknown ages are kept; only known-but-implausible ages are rejected.
pub fn is_valid(record: &RawRecord, range: &AgeRange) -> bool {
    record.age.is_none_or(|age| range.contains(age))
}

/// Keeps records whose age is absent or within 16..=100.
pub fn filter_valid(records: Vec<RawRecord>) -> Vec<RawRecord> {
    filter_valid_with_range(records, &AgeRange::default())
}

/// Keeps records whose age is absent or within `range`.
pub fn filter_valid_with_range(records: Vec<RawRecord>, range: &AgeRange) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = is_valid(record, range);
            if !keep {
                debug!(id = record.id, age = ?record.age, "dropping record with implausible age");
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_age(id: u64, age: Option<i32>) -> RawRecord {
        RawRecord {
            age,
            ..RawRecord::new(id)
        }
    }

    #[test]
    fn test_age_boundaries() {
        let records = vec![
            with_age(1, Some(15)),
            with_age(2, Some(16)),
            with_age(3, Some(100)),
            with_age(4, Some(101)),
            with_age(5, None),
        ];
        let kept: Vec<u64> = filter_valid(records).iter().map(|r| r.id).collect();
        assert_eq!(kept, vec![2, 3, 5]);
    }

    #[test]
    fn test_negative_age_is_dropped() {
        assert!(!is_valid(&with_age(1, Some(-20)), &AgeRange::default()));
    }

    #[test]
    fn test_custom_range() {
        let range = AgeRange::new(18, 30);
        let records = vec![with_age(1, Some(17)), with_age(2, Some(18)), with_age(3, Some(31))];
        let kept: Vec<u64> = filter_valid_with_range(records, &range)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![2]);
    }
}
