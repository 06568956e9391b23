//! Categorical normalization of survey answers.

mod answers;
mod demographics;

pub use answers::{
    normalize_app, normalize_barrier, normalize_composition, normalize_frequency,
    normalize_looking_for, normalize_pay, normalize_tried, normalize_where,
};
pub use demographics::{age_band, normalize_gender, normalize_relationship};

use survey_model::{GenderLabel, RawRecord, RelationshipLabel};

use crate::rules::labels;

/// A categorical question of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Gender,
    Relationship,
    Frequency,
    HasTried,
    Barriers,
    LookingFor,
    Composition,
    WhereSearch,
    WouldUseApp,
    WouldPay,
}

impl Dimension {
    pub const ALL: [Dimension; 10] = [
        Dimension::Gender,
        Dimension::Relationship,
        Dimension::Frequency,
        Dimension::HasTried,
        Dimension::Barriers,
        Dimension::LookingFor,
        Dimension::Composition,
        Dimension::WhereSearch,
        Dimension::WouldUseApp,
        Dimension::WouldPay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Gender => "gender",
            Dimension::Relationship => "relationship",
            Dimension::Frequency => "frequency",
            Dimension::HasTried => "has_tried",
            Dimension::Barriers => "barriers",
            Dimension::LookingFor => "looking_for",
            Dimension::Composition => "composition",
            Dimension::WhereSearch => "where_search",
            Dimension::WouldUseApp => "would_use_app",
            Dimension::WouldPay => "would_pay",
        }
    }

    /// Whether respondents may give several answers for this question.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            Dimension::Barriers | Dimension::Composition | Dimension::WhereSearch
        )
    }

    /// Every label [`Dimension::normalize`] can return for this dimension.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            Dimension::Gender => GenderLabel::ALL.iter().map(GenderLabel::as_str).collect(),
            Dimension::Relationship => RelationshipLabel::ALL
                .iter()
                .map(RelationshipLabel::as_str)
                .collect(),
            Dimension::Frequency => labels(answers::FREQUENCY_RULES),
            Dimension::HasTried => labels(answers::TRIED_RULES),
            Dimension::Barriers => labels(answers::BARRIER_RULES),
            Dimension::LookingFor => labels(answers::LOOKING_FOR_RULES),
            Dimension::Composition => labels(answers::COMPOSITION_RULES),
            Dimension::WhereSearch => labels(answers::WHERE_RULES),
            Dimension::WouldUseApp => labels(answers::APP_RULES),
            Dimension::WouldPay => labels(answers::PAY_RULES),
        }
    }

    /// Whether every present answer resolves to a label.
    pub fn always_resolves(&self) -> bool {
        matches!(self, Dimension::Gender | Dimension::Relationship)
    }

    /// Normalizes one answer of this dimension.
    pub fn normalize(&self, raw: &str) -> Option<&'static str> {
        let raw = Some(raw);
        match self {
            Dimension::Gender => normalize_gender(raw).map(|label| label.as_str()),
            Dimension::Relationship => normalize_relationship(raw).map(|label| label.as_str()),
            Dimension::Frequency => normalize_frequency(raw),
            Dimension::HasTried => normalize_tried(raw),
            Dimension::Barriers => normalize_barrier(raw),
            Dimension::LookingFor => normalize_looking_for(raw),
            Dimension::Composition => normalize_composition(raw),
            Dimension::WhereSearch => normalize_where(raw),
            Dimension::WouldUseApp => normalize_app(raw),
            Dimension::WouldPay => normalize_pay(raw),
        }
    }

    /// Raw answers a record holds for this dimension, blanks excluded.
    pub fn raw_values<'a>(&self, record: &'a RawRecord) -> Vec<&'a str> {
        let single = |value: &'a str| -> Vec<&'a str> {
            if value.trim().is_empty() {
                Vec::new()
            } else {
                vec![value]
            }
        };
        let many = |values: &'a [String]| -> Vec<&'a str> {
            values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.trim().is_empty())
                .collect()
        };
        match self {
            Dimension::Gender => single(&record.gender),
            Dimension::Relationship => single(&record.relationship),
            Dimension::Frequency => single(&record.frequency),
            Dimension::HasTried => single(&record.has_tried),
            Dimension::Barriers => many(&record.barriers),
            Dimension::LookingFor => single(&record.looking_for),
            Dimension::Composition => many(&record.composition),
            Dimension::WhereSearch => many(&record.where_search),
            Dimension::WouldUseApp => single(&record.would_use_app),
            Dimension::WouldPay => single(&record.would_pay),
        }
    }

    /// Normalized answers of a record, keeping unrecognised ones verbatim.
    pub fn values(&self, record: &RawRecord) -> Vec<String> {
        self.raw_values(record)
            .into_iter()
            .map(|raw| normalize_or_raw(*self, raw))
            .collect()
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == wanted)
            .ok_or_else(|| format!("unknown dimension: {s}"))
    }
}

/// The normalized label, or the trimmed raw answer when no rule matches.
pub fn normalize_or_raw(dimension: Dimension, raw: &str) -> String {
    dimension
        .normalize(raw)
        .map_or_else(|| raw.trim().to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.as_str().parse::<Dimension>(), Ok(dimension));
        }
        assert_eq!("where-search".parse::<Dimension>(), Ok(Dimension::WhereSearch));
        assert!("age".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_normalize_or_raw() {
        assert_eq!(
            normalize_or_raw(Dimension::WouldPay, "No pagaria"),
            "Només gratuïta"
        );
        assert_eq!(
            normalize_or_raw(Dimension::WouldPay, "  Ja veurem "),
            "Ja veurem"
        );
    }

    #[test]
    fn test_values_of_list_dimension() {
        let record = RawRecord {
            where_search: vec!["-".to_string(), "Entorns socials".to_string()],
            ..RawRecord::new(1)
        };
        assert_eq!(
            Dimension::WhereSearch.values(&record),
            vec!["-", "Entorns socials"]
        );
        assert!(Dimension::Barriers.values(&record).is_empty());
    }
}
