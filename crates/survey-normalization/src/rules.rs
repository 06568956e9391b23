//! Ordered keyword rules.
//!
//! A rule table is a static slice evaluated top to bottom; the first rule
//! whose predicate accepts the lower-cased answer decides the label.
//! Predicates overlap on purpose, so table order is part of the contract.

/// One entry of an ordered rule table.
#[derive(Clone, Copy)]
pub struct Rule<L: 'static> {
    pub label: L,
    pub matches: fn(&str) -> bool,
}

impl<L: std::fmt::Debug> std::fmt::Debug for Rule<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish()
    }
}

/// Returns the label of the first matching rule.
pub fn first_match<L: Copy>(rules: &[Rule<L>], lowered: &str) -> Option<L> {
    rules
        .iter()
        .find(|rule| (rule.matches)(lowered))
        .map(|rule| rule.label)
}

/// The answer as given, or `None` when it is absent or empty.
///
/// Answers are not trimmed here: `" mai "` is not `mai`. Mapped records
/// already carry trimmed fields.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Lower-cased copy of a present answer, used for matching only.
pub fn lowered(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_lowercase)
}

/// Labels of a rule table, in rule order.
pub fn labels<L: Copy>(rules: &[Rule<L>]) -> Vec<L> {
    rules.iter().map(|rule| rule.label).collect()
}

/// Applies a rule table to an optional answer.
pub fn apply<L: Copy>(rules: &[Rule<L>], raw: Option<&str>) -> Option<L> {
    let value = lowered(raw)?;
    first_match(rules, &value)
}
