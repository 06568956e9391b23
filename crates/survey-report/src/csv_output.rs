//! Flat CSV export of the dashboard projection.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::dashboard::DashboardRecord;

/// Writes one header row plus one row per record.
pub fn write_records_csv<W: Write>(writer: W, records: &[DashboardRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .with_context(|| format!("serialize record {}", record.id))?;
    }
    csv_writer.flush().context("flush csv output")?;
    Ok(())
}

pub fn write_records_csv_file(path: &Path, records: &[DashboardRecord]) -> Result<()> {
    let file =
        std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_records_csv(std::io::BufWriter::new(file), records)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "wrote csv export");
    Ok(())
}
