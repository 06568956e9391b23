//! Normalizers for the behavioural and product questions.
//!
//! Unlike the demographic dimensions these have no catch-all: an answer
//! no rule recognises normalizes to `None`, and callers decide whether to
//! keep the raw text (see [`crate::normalize_or_raw`]).

use crate::rules::{Rule, apply};

pub const FREQUENCY_OFTEN: &str = "Sovint";
pub const FREQUENCY_FANTASY: &str = "Fantasia recurrent";
pub const FREQUENCY_ONCE: &str = "Alguna vegada puntual";
pub const FREQUENCY_NEVER: &str = "Mai";
pub const NOT_CONSIDERED: &str = "No m'ho plantejo";

pub const TRIED_SUCCESS: &str = "Sí, amb èxit";
pub const TRIED_FAILED: &str = "Sí, però no ha sortit bé";
pub const TRIED_WOULD_LIKE: &str = "No, però m'agradaria";

pub(super) static FREQUENCY_RULES: &[Rule<&str>] = &[
    Rule {
        label: FREQUENCY_OFTEN,
        matches: |l| l.contains("sovint"),
    },
    Rule {
        label: FREQUENCY_FANTASY,
        matches: |l| l.contains("fantasia"),
    },
    Rule {
        label: FREQUENCY_ONCE,
        matches: |l| l.contains("puntual") || l.contains("alguna"),
    },
    Rule {
        label: FREQUENCY_NEVER,
        matches: |l| l == "mai",
    },
    Rule {
        label: NOT_CONSIDERED,
        matches: |l| l.contains("plantejo"),
    },
];

pub(super) static TRIED_RULES: &[Rule<&str>] = &[
    Rule {
        label: TRIED_SUCCESS,
        matches: |l| l.contains("xit") || l.contains("èxit") || l.contains("exit"),
    },
    Rule {
        label: TRIED_FAILED,
        matches: |l| {
            l.contains("no ha sortit") || (l.contains('s') && l.contains("per") && l.contains("no"))
        },
    },
    Rule {
        label: TRIED_WOULD_LIKE,
        matches: |l| l.contains("agradaria"),
    },
    Rule {
        label: NOT_CONSIDERED,
        matches: |l| l.contains("plantejo"),
    },
];

pub(super) static BARRIER_RULES: &[Rule<&str>] = &[
    Rule {
        label: "No ha sortit de forma natural",
        matches: |l| l.contains("natural") || l.contains("sortit de forma"),
    },
    Rule {
        label: "Por a la seguretat",
        matches: |l| l.contains("seguretat") && !l.contains("confian"),
    },
    Rule {
        label: "Vergonya / judici social",
        matches: |l| l.contains("vergonya") || l.contains("judici"),
    },
    Rule {
        label: "Manca de confiança",
        matches: |l| l.contains("confian"),
    },
    Rule {
        label: "No saber on buscar",
        matches: |l| l.contains("saber on") || l.contains("on buscar"),
    },
    Rule {
        label: "Gelosia",
        matches: |l| l.contains("gelosia"),
    },
    Rule {
        label: "Mala experiència prèvia",
        matches: |l| l.contains("mala exp"),
    },
];

pub(super) static LOOKING_FOR_RULES: &[Rule<&str>] = &[
    Rule {
        label: "Indiferent / Depèn",
        matches: |l| l.contains("indiferent") || l.contains("dep"),
    },
    Rule {
        label: "Persones solteres",
        matches: |l| l.contains("solteres"),
    },
    Rule {
        label: "Parelles",
        matches: |l| l.contains("parelles") || l.contains("arelles"),
    },
];

pub(super) static COMPOSITION_RULES: &[Rule<&str>] = &[
    Rule {
        label: "1 home + 2 dones",
        matches: |l| l.contains("1 home + 2 dones") || l.contains("1 home +2 dones"),
    },
    Rule {
        label: "2 homes + 1 dona",
        matches: |l| l.contains("2 homes + 1 dona") || l.contains("2 homes +1 dona"),
    },
    Rule {
        label: "3 del mateix gènere",
        matches: |l| l.contains("3 persones") || l.contains("mateix g"),
    },
    Rule {
        label: "4+ persones",
        matches: |l| l.contains("4 persones") || l.contains("4+"),
    },
];

pub(super) static WHERE_RULES: &[Rule<&str>] = &[
    Rule {
        label: "Entorns socials",
        matches: |l| l.contains("entorns"),
    },
    Rule {
        label: "Apps especialitzades",
        matches: |l| l.contains("especialitzades"),
    },
    Rule {
        label: "Apps de cites tradicionals",
        matches: |l| l.contains("tradicionals"),
    },
    Rule {
        label: "No buscaria",
        matches: |l| l.contains("no buscaria"),
    },
    Rule {
        label: "No sé on buscar",
        matches: |l| l.contains("no s") && l.contains("on buscar"),
    },
];

pub(super) static APP_RULES: &[Rule<&str>] = &[
    Rule {
        label: "Sí segur",
        matches: |l| l.contains("segur") && (l.starts_with('s') || l.contains("si")),
    },
    Rule {
        label: "Potser",
        matches: |l| l.contains("potser") || l.contains("consensuat"),
    },
    Rule {
        label: "Probablement no",
        matches: |l| l.contains("probablement no"),
    },
    Rule {
        label: "No",
        matches: |l| l.contains("no") && !l.contains("potser") && !l.contains("probablement"),
    },
];

pub(super) static PAY_RULES: &[Rule<&str>] = &[
    Rule {
        label: "Només gratuïta",
        matches: |l| l.contains("gratu") || l.contains("no pagaria"),
    },
    Rule {
        label: "Preu molt baix",
        matches: |l| l.contains("molt baix"),
    },
    Rule {
        label: "Potser, depenent del preu",
        matches: |l| l.contains("depenent") || (l.contains("potser") && l.contains("preu")),
    },
    Rule {
        label: "Sí, segurament",
        matches: |l| l.contains("segurament"),
    },
];

/// How often the respondent has thought about it.
pub fn normalize_frequency(raw: Option<&str>) -> Option<&'static str> {
    apply(FREQUENCY_RULES, raw)
}

/// Whether the respondent has tried it, and how it went.
pub fn normalize_tried(raw: Option<&str>) -> Option<&'static str> {
    apply(TRIED_RULES, raw)
}

/// A single barrier item.
pub fn normalize_barrier(raw: Option<&str>) -> Option<&'static str> {
    apply(BARRIER_RULES, raw)
}

/// Who the respondent would look for.
pub fn normalize_looking_for(raw: Option<&str>) -> Option<&'static str> {
    apply(LOOKING_FOR_RULES, raw)
}

/// A single preferred group composition.
pub fn normalize_composition(raw: Option<&str>) -> Option<&'static str> {
    apply(COMPOSITION_RULES, raw)
}

/// A single place the respondent would search.
pub fn normalize_where(raw: Option<&str>) -> Option<&'static str> {
    apply(WHERE_RULES, raw)
}

/// Willingness to use a dedicated app.
pub fn normalize_app(raw: Option<&str>) -> Option<&'static str> {
    apply(APP_RULES, raw)
}

/// Willingness to pay for it.
pub fn normalize_pay(raw: Option<&str>) -> Option<&'static str> {
    apply(PAY_RULES, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency() {
        assert_eq!(normalize_frequency(Some("Sovint")), Some(FREQUENCY_OFTEN));
        assert_eq!(normalize_frequency(Some("Alguna vegada")), Some(FREQUENCY_ONCE));
        assert_eq!(normalize_frequency(Some("MAI")), Some(FREQUENCY_NEVER));
        // "mai" only matches as the whole answer.
        assert_eq!(normalize_frequency(Some("Mai de la vida")), None);
        assert_eq!(normalize_frequency(Some("No m'ho plantejo")), Some(NOT_CONSIDERED));
        assert_eq!(normalize_frequency(Some("")), None);
        // Untrimmed answers are matched as given.
        assert_eq!(normalize_frequency(Some(" mai ")), None);
    }

    #[test]
    fn test_tried() {
        assert_eq!(normalize_tried(Some("Sí, amb èxit")), Some(TRIED_SUCCESS));
        assert_eq!(
            normalize_tried(Some("Sí, però no ha sortit bé")),
            Some(TRIED_FAILED)
        );
        // Any answer mentioning "s", "per" and "no" counts as a failed try.
        assert_eq!(normalize_tried(Some("Sí, per sort no")), Some(TRIED_FAILED));
        assert_eq!(
            normalize_tried(Some("No, però m'agradaria")),
            Some(TRIED_WOULD_LIKE)
        );
        assert_eq!(normalize_tried(Some("Tampoc")), None);
    }

    #[test]
    fn test_barrier_order() {
        assert_eq!(
            normalize_barrier(Some("Seguretat i confiança")),
            Some("Manca de confiança")
        );
        assert_eq!(
            normalize_barrier(Some("Seguretat")),
            Some("Por a la seguretat")
        );
        assert_eq!(
            normalize_barrier(Some("No ha sortit de forma natural")),
            Some("No ha sortit de forma natural")
        );
        assert_eq!(normalize_barrier(Some("Gelosia")), Some("Gelosia"));
        assert_eq!(normalize_barrier(Some("Res")), None);
    }

    #[test]
    fn test_looking_for_and_composition() {
        assert_eq!(
            normalize_looking_for(Some("Depèn")),
            Some("Indiferent / Depèn")
        );
        assert_eq!(normalize_looking_for(Some("Parelles")), Some("Parelles"));
        assert_eq!(
            normalize_composition(Some("1 home +2 dones")),
            Some("1 home + 2 dones")
        );
        assert_eq!(
            normalize_composition(Some("3 persones del mateix gènere")),
            Some("3 del mateix gènere")
        );
        assert_eq!(normalize_composition(Some("4+")), Some("4+ persones"));
    }

    #[test]
    fn test_where() {
        assert_eq!(
            normalize_where(Some("Entorns socials")),
            Some("Entorns socials")
        );
        assert_eq!(
            normalize_where(Some("No sé on buscar")),
            Some("No sé on buscar")
        );
        assert_eq!(normalize_where(Some("-")), None);
    }

    #[test]
    fn test_app_and_pay() {
        assert_eq!(normalize_app(Some("Sí segur")), Some("Sí segur"));
        assert_eq!(normalize_app(Some("Potser, si és consensuat")), Some("Potser"));
        assert_eq!(normalize_app(Some("Probablement no")), Some("Probablement no"));
        assert_eq!(normalize_app(Some("No")), Some("No"));
        assert_eq!(normalize_pay(Some("No pagaria")), Some("Només gratuïta"));
        assert_eq!(
            normalize_pay(Some("Potser, si el preu és bo")),
            Some("Potser, depenent del preu")
        );
        assert_eq!(normalize_pay(Some("Sí, segurament")), Some("Sí, segurament"));
    }
}
