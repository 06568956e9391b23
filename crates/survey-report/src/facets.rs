//! Filter facets offered by the dashboard.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dashboard::DashboardRecord;

/// Inclusive range of the ages present in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeSpan {
    pub min: i32,
    pub max: i32,
}

/// Distinct non-empty values per filterable column, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterFacets {
    #[serde(rename = "genere")]
    pub gender: Vec<String>,
    #[serde(rename = "estat_relacional")]
    pub relationship: Vec<String>,
    #[serde(rename = "frequencia")]
    pub frequency: Vec<String>,
    #[serde(rename = "experiencia")]
    pub has_tried: Vec<String>,
    #[serde(rename = "que_buscaries")]
    pub looking_for: Vec<String>,
    #[serde(rename = "usaries_app")]
    pub would_use_app: Vec<String>,
    #[serde(rename = "pagaries")]
    pub would_pay: Vec<String>,
    /// `None` when no record carries an age.
    #[serde(rename = "edat")]
    pub age: Option<AgeSpan>,
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn build_facets(records: &[DashboardRecord]) -> FilterFacets {
    let column = |select: fn(&DashboardRecord) -> &str| {
        unique_sorted(records.iter().map(select))
    };
    let ages = records.iter().filter_map(|record| record.age);
    let age = ages
        .clone()
        .min()
        .zip(ages.max())
        .map(|(min, max)| AgeSpan { min, max });

    FilterFacets {
        gender: column(|record| record.gender.as_str()),
        relationship: column(|record| record.relationship.as_str()),
        frequency: column(|record| record.frequency.as_str()),
        has_tried: column(|record| record.has_tried.as_str()),
        looking_for: column(|record| record.looking_for.as_str()),
        would_use_app: column(|record| record.would_use_app.as_str()),
        would_pay: column(|record| record.would_pay.as_str()),
        age,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::RawRecord;

    fn row(id: u64, age: Option<i32>, gender: &str, frequency: &str) -> DashboardRecord {
        DashboardRecord::from_raw(&RawRecord {
            age,
            gender: gender.to_string(),
            frequency: frequency.to_string(),
            ..RawRecord::new(id)
        })
    }

    #[test]
    fn test_facets_are_unique_sorted_and_non_empty() {
        let rows = vec![
            row(1, Some(30), "Home", "Sovint"),
            row(2, None, "Dona", ""),
            row(3, Some(19), "Home", "Mai"),
        ];
        let facets = build_facets(&rows);
        assert_eq!(facets.gender, vec!["Dona", "Home"]);
        assert_eq!(facets.frequency, vec!["Mai", "Sovint"]);
        assert_eq!(facets.age, Some(AgeSpan { min: 19, max: 30 }));
    }

    #[test]
    fn test_no_ages_means_no_span() {
        let facets = build_facets(&[row(1, None, "Home", "")]);
        assert_eq!(facets.age, None);
        assert!(facets.frequency.is_empty());
    }
}
