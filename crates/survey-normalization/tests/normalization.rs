//! Integration tests for survey normalization.

use proptest::prelude::*;
use survey_model::{AgeBand, GenderLabel, RelationshipLabel};
use survey_normalization::{
    Dimension, age_band, normalize_gender, normalize_relationship, parse_normalized,
};

proptest! {
    #[test]
    fn results_come_from_declared_labels(answer in "\\PC{0,40}") {
        for dimension in Dimension::ALL {
            let labels = dimension.labels();
            let result = dimension.normalize(&answer);
            prop_assert!(
                result.is_none_or(|label| labels.contains(&label)),
                "{} produced undeclared label {:?}",
                dimension,
                result
            );
            if dimension.always_resolves() {
                prop_assert_eq!(result.is_some(), !answer.is_empty());
            }
        }
    }

    #[test]
    fn labels_ignore_case(answer in "[a-zA-Zàèéíòóú /+-]{1,30}") {
        for dimension in Dimension::ALL {
            if dimension == Dimension::Gender {
                continue;
            }
            prop_assert_eq!(
                dimension.normalize(&answer),
                dimension.normalize(&answer.to_uppercase())
            );
        }
    }

    #[test]
    fn present_demographics_always_resolve(answer in "[a-zA-Z]{1,20}") {
        prop_assert!(normalize_gender(Some(&answer)).is_some());
        prop_assert!(normalize_relationship(Some(&answer)).is_some());
    }

    #[test]
    fn every_positive_age_has_a_band(age in 1i32..=120) {
        prop_assert!(age_band(Some(age)).is_some());
    }
}

#[test]
fn test_declared_labels() {
    assert_eq!(Dimension::Gender.labels(), vec!["Home", "Dona", "Altre"]);
    assert_eq!(
        Dimension::WouldUseApp.labels(),
        vec!["Sí segur", "Potser", "Probablement no", "No"]
    );
    for dimension in Dimension::ALL {
        assert!(!dimension.labels().is_empty(), "{dimension}");
    }
}

#[test]
fn test_relationship_order_prefers_polyamory_over_labels() {
    assert_eq!(
        normalize_relationship(Some("Relació poliamorosa sense etiquetes")),
        Some(RelationshipLabel::Polyamorous)
    );
}

#[test]
fn test_parse_normalized() {
    let raw = "h1\nh2\n7;x;x;x;x;30;Home;Solter/a;Sovint\n8;x;x;x;x;;Dona;Poliamor\n";
    let records = parse_normalized(raw);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].gender, GenderLabel::Man);
    assert_eq!(records[0].relationship, RelationshipLabel::Single);
    assert_eq!(records[0].age_band, Some(AgeBand::From26To30));
    assert_eq!(records[1].relationship, RelationshipLabel::Polyamorous);
    assert_eq!(records[1].age_band, None);
}
