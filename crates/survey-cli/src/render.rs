//! Plain-text renderings shared by the subcommands.

use survey_model::RawRecord;
use survey_normalization::{Dimension, normalize_records};
use survey_report::{DimensionSummary, FilterFacets, summarize, summarize_age_bands};

/// Age bands first, then every categorical question in survey order.
pub fn summaries(records: &[RawRecord]) -> Vec<DimensionSummary> {
    let normalized = normalize_records(records);
    let mut summaries = vec![summarize_age_bands(&normalized)];
    summaries.extend(
        Dimension::ALL
            .into_iter()
            .map(|dimension| summarize(records, dimension)),
    );
    summaries
}

/// One `column: value, value` line per facet, plus the age span.
pub fn render_facets(facets: &FilterFacets) -> String {
    let columns: [(&str, &[String]); 7] = [
        ("genere", facets.gender.as_slice()),
        ("estat_relacional", facets.relationship.as_slice()),
        ("frequencia", facets.frequency.as_slice()),
        ("experiencia", facets.has_tried.as_slice()),
        ("que_buscaries", facets.looking_for.as_slice()),
        ("usaries_app", facets.would_use_app.as_slice()),
        ("pagaries", facets.would_pay.as_slice()),
    ];
    let mut lines: Vec<String> = columns
        .into_iter()
        .map(|(name, values)| {
            let joined = if values.is_empty() {
                "-".to_string()
            } else {
                values.join(", ")
            };
            format!("{name}: {joined}")
        })
        .collect();
    lines.push(match facets.age {
        Some(span) => format!("edat: {}-{}", span.min, span.max),
        None => "edat: -".to_string(),
    });
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
