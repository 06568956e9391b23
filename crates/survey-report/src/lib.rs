//! Survey report derivations.
//!
//! This crate turns parsed survey records into the data a dashboard needs:
//!
//! - **Projection**: Flat per-respondent rows with pre-normalized demographics
//! - **Facets**: Distinct filter values and the age span
//! - **Counts**: Answer distributions per question, with percentages
//! - **KPIs**: Headline numbers
//! - **Export**: Pretty JSON and flat CSV

mod counts;
mod csv_output;
mod dashboard;
mod facets;
mod kpi;

pub use counts::{
    CountRow, DimensionSummary, count_by, pct, sorted_counts, summarize, summarize_age_bands,
};
pub use csv_output::{write_records_csv, write_records_csv_file};
pub use dashboard::{DashboardData, DashboardRecord, LIST_SEPARATOR, build_dashboard};
pub use facets::{AgeSpan, FilterFacets, build_facets};
pub use kpi::{Kpis, compute_kpis};
