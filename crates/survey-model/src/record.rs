//! Respondent records.

use serde::{Deserialize, Serialize};

use crate::labels::{AgeBand, GenderLabel, RelationshipLabel};

/// One respondent as mapped from a logical input record, before any label
/// normalization.
///
/// Text fields are trimmed and may be empty. List fields never contain
/// empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    /// Absent when the answer was missing, unparsable or zero.
    pub age: Option<i32>,
    pub gender: String,
    pub relationship: String,
    pub frequency: String,
    pub has_tried: String,
    pub barriers: Vec<String>,
    pub looking_for: String,
    pub composition: Vec<String>,
    /// Keeps the `-` "no answer" token, unlike the other list fields.
    pub where_search: Vec<String>,
    pub would_use_app: String,
    pub would_pay: String,
    pub open_text: String,
}

impl RawRecord {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// A raw record bundled with the three labels every consumer needs.
///
/// This is a derived view: it can be rebuilt at any time from the raw
/// record and the current rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub raw: RawRecord,
    pub gender: GenderLabel,
    pub relationship: RelationshipLabel,
    pub age_band: Option<AgeBand>,
}

impl NormalizedRecord {
    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn age(&self) -> Option<i32> {
        self.raw.age
    }
}
