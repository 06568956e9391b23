//! Dashboard projection of survey records.
//!
//! Each record is flattened into a row the dashboard consumes: the three
//! demographic labels are pre-normalized, list answers are joined with
//! `;` and every other answer is passed through verbatim.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use survey_model::RawRecord;
use survey_normalization::normalize_record;
use tracing::{debug, info};

use crate::facets::{FilterFacets, build_facets};
use crate::kpi::{Kpis, compute_kpis};

/// Separator of list answers in the dashboard projection.
pub const LIST_SEPARATOR: &str = ";";

/// One respondent as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRecord {
    pub id: u64,
    #[serde(rename = "edat")]
    pub age: Option<i32>,
    #[serde(rename = "genere")]
    pub gender: String,
    #[serde(rename = "estat_relacional")]
    pub relationship: String,
    #[serde(rename = "rang_edat")]
    pub age_band: Option<String>,
    #[serde(rename = "frequencia")]
    pub frequency: String,
    #[serde(rename = "experiencia")]
    pub has_tried: String,
    #[serde(rename = "barreres")]
    pub barriers: String,
    #[serde(rename = "que_buscaries")]
    pub looking_for: String,
    #[serde(rename = "composicio")]
    pub composition: String,
    #[serde(rename = "on_buscaries")]
    pub where_search: String,
    #[serde(rename = "usaries_app")]
    pub would_use_app: String,
    #[serde(rename = "pagaries")]
    pub would_pay: String,
    #[serde(rename = "feedback")]
    pub open_text: String,
}

impl DashboardRecord {
    pub fn from_raw(record: &RawRecord) -> Self {
        let normalized = normalize_record(record);
        Self {
            id: record.id,
            age: record.age,
            gender: normalized.gender.as_str().to_string(),
            relationship: normalized.relationship.as_str().to_string(),
            age_band: normalized.age_band.map(|band| band.as_str().to_string()),
            frequency: record.frequency.clone(),
            has_tried: record.has_tried.clone(),
            barriers: join_list(&record.barriers),
            looking_for: record.looking_for.clone(),
            composition: join_list(&record.composition),
            where_search: join_list(&record.where_search),
            would_use_app: record.would_use_app.clone(),
            would_pay: record.would_pay.clone(),
            open_text: record.open_text.clone(),
        }
    }
}

fn join_list(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

/// Everything the dashboard embeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub records: Vec<DashboardRecord>,
    pub facets: FilterFacets,
    pub kpis: Kpis,
}

impl DashboardData {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize dashboard data")
    }

    /// Writes the pretty JSON document followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self).context("serialize dashboard data")?;
        writeln!(writer).context("write dashboard data")?;
        Ok(())
    }

    pub fn write_json_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        self.write_json(std::io::BufWriter::new(file))
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), records = self.records.len(), "wrote dashboard data");
        Ok(())
    }
}

/// Projects records and derives facets and KPIs.
pub fn build_dashboard(records: &[RawRecord]) -> DashboardData {
    let projected: Vec<DashboardRecord> = records.iter().map(DashboardRecord::from_raw).collect();
    let facets = build_facets(&projected);
    let kpis = compute_kpis(&projected);
    debug!(records = projected.len(), "built dashboard data");
    DashboardData {
        records: projected,
        facets,
        kpis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawRecord {
        RawRecord {
            age: Some(24),
            gender: "Dona".to_string(),
            relationship: "Poliamor".to_string(),
            barriers: vec!["Gelosia".to_string(), "Vergonya".to_string()],
            where_search: vec!["-".to_string()],
            would_use_app: "Potser".to_string(),
            ..RawRecord::new(8)
        }
    }

    #[test]
    fn test_projection() {
        let row = DashboardRecord::from_raw(&sample());
        assert_eq!(row.gender, "Dona");
        assert_eq!(row.relationship, "Relació poliamorosa");
        assert_eq!(row.age_band.as_deref(), Some("21-25"));
        assert_eq!(row.barriers, "Gelosia;Vergonya");
        assert_eq!(row.where_search, "-");
        assert_eq!(row.composition, "");
    }

    #[test]
    fn test_json_uses_dashboard_field_names() {
        let data = build_dashboard(&[sample()]);
        let json: serde_json::Value =
            serde_json::from_str(&data.to_json_pretty().unwrap()).unwrap();
        let row = &json["records"][0];
        assert_eq!(row["id"], 8);
        assert_eq!(row["edat"], 24);
        assert_eq!(row["genere"], "Dona");
        assert_eq!(row["barreres"], "Gelosia;Vergonya");
        assert_eq!(row["usaries_app"], "Potser");
        assert_eq!(row["feedback"], "");
        assert_eq!(json["facets"]["edat"]["min"], 24);
    }

    #[test]
    fn test_blank_demographics_become_other() {
        let row = DashboardRecord::from_raw(&RawRecord::new(1));
        assert_eq!(row.gender, "Altre");
        assert_eq!(row.relationship, "Altre");
        assert_eq!(row.age_band, None);
    }
}
