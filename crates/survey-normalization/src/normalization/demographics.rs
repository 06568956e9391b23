//! Demographic normalizers: gender, age band and relationship model.
//!
//! These always resolve once an answer is present; anything the rules do
//! not recognise falls into the `Altre` catch-all.

use survey_model::{AgeBand, GenderLabel, RelationshipLabel};

use crate::rules::{Rule, apply, present};

static RELATIONSHIP_RULES: &[Rule<RelationshipLabel>] = &[
    Rule {
        label: RelationshipLabel::Single,
        matches: |l| l.contains("solter"),
    },
    Rule {
        label: RelationshipLabel::Monogamous,
        matches: |l| l.contains("mon") || l.contains("estandar"),
    },
    Rule {
        label: RelationshipLabel::OpenCouple,
        matches: |l| l.contains("oberta") || l.contains("liberal") || l.contains("pseudo"),
    },
    Rule {
        label: RelationshipLabel::Polyamorous,
        matches: |l| l.contains("poliam"),
    },
    Rule {
        label: RelationshipLabel::NoLabels,
        matches: |l| l.contains("etiquetes"),
    },
];

/// Maps a gender answer. Only the exact labels `Home` and `Dona` are
/// recognised; every other present answer becomes `Altre`.
pub fn normalize_gender(raw: Option<&str>) -> Option<GenderLabel> {
    let value = present(raw)?;
    Some(match value {
        "Home" => GenderLabel::Man,
        "Dona" => GenderLabel::Woman,
        _ => GenderLabel::Other,
    })
}

/// Buckets an age. A missing or zero age has no band.
pub fn age_band(age: Option<i32>) -> Option<AgeBand> {
    age.filter(|&age| age != 0).map(AgeBand::for_age)
}

/// Maps a relationship answer onto the relationship model labels.
pub fn normalize_relationship(raw: Option<&str>) -> Option<RelationshipLabel> {
    present(raw)?;
    Some(apply(RELATIONSHIP_RULES, raw).unwrap_or(RelationshipLabel::Other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_is_exact() {
        assert_eq!(normalize_gender(Some("Home")), Some(GenderLabel::Man));
        assert_eq!(normalize_gender(Some("Dona")), Some(GenderLabel::Woman));
        assert_eq!(normalize_gender(Some("home")), Some(GenderLabel::Other));
        assert_eq!(normalize_gender(Some("No binari")), Some(GenderLabel::Other));
        assert_eq!(normalize_gender(Some(" Home ")), Some(GenderLabel::Other));
        assert_eq!(normalize_gender(Some("")), None);
        assert_eq!(normalize_gender(None), None);
    }

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(age_band(Some(20)), Some(AgeBand::UpTo20));
        assert_eq!(age_band(Some(21)), Some(AgeBand::From21To25));
        assert_eq!(age_band(Some(30)), Some(AgeBand::From26To30));
        assert_eq!(age_band(Some(40)), Some(AgeBand::From36To40));
        assert_eq!(age_band(Some(41)), Some(AgeBand::Over40));
        assert_eq!(age_band(Some(0)), None);
        assert_eq!(age_band(None), None);
    }

    #[test]
    fn test_relationship_rule_order() {
        assert_eq!(
            normalize_relationship(Some("Solter/a")),
            Some(RelationshipLabel::Single)
        );
        assert_eq!(
            normalize_relationship(Some("Parella estandar")),
            Some(RelationshipLabel::Monogamous)
        );
        // "poliam" is checked before "etiquetes".
        assert_eq!(
            normalize_relationship(Some("Poliamor sense etiquetes")),
            Some(RelationshipLabel::Polyamorous)
        );
        assert_eq!(
            normalize_relationship(Some("Sense etiquetes")),
            Some(RelationshipLabel::NoLabels)
        );
        assert_eq!(
            normalize_relationship(Some("Pseudo-oberta")),
            Some(RelationshipLabel::OpenCouple)
        );
        assert_eq!(
            normalize_relationship(Some("Complicat")),
            Some(RelationshipLabel::Other)
        );
        assert_eq!(normalize_relationship(None), None);
    }
}
