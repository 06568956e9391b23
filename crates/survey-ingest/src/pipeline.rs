//! Survey parsing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Split**: Break the text into non-blank physical lines
//! 2. **Reassemble**: Skip the header and regroup multi-line records
//! 3. **Map**: Tokenize each logical record and map it to a [`RawRecord`]
//! 4. **Filter**: Drop records with an implausible age
//!
//! Label normalization is not part of the pipeline; consumers apply it on
//! demand so the mapped records stay authoritative.

use serde::Serialize;
use survey_model::RawRecord;
use tracing::{debug, info, info_span, warn};

use crate::filter::filter_valid_with_range;
use crate::options::IngestOptions;
use crate::reassemble::{IdPrefix, Reassembler};
use crate::schema::map_record;

/// Counters collected while parsing one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-blank physical lines, header included.
    pub physical_lines: usize,
    /// Logical records after reassembly.
    pub logical_records: usize,
    /// Records skipped because their id did not parse.
    pub rejected: usize,
    /// Records dropped by the validity filter.
    pub filtered_out: usize,
}

/// Result of parsing one survey export.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<RawRecord>,
    pub stats: ParseStats,
}

/// Splits text into physical lines, dropping blank ones.
///
/// A trailing `\r` is removed so CRLF exports behave like LF exports.
pub fn physical_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Parses a survey export with default options.
pub fn parse(raw: &str) -> Vec<RawRecord> {
    parse_with_options(raw, &IngestOptions::default()).records
}

/// Parses a survey export, returning the surviving records and counters.
///
/// Never fails as a whole: a record whose id does not parse is skipped and
/// counted in [`ParseStats::rejected`].
pub fn parse_with_options(raw: &str, options: &IngestOptions) -> ParseOutcome {
    let span = info_span!("parse", delimiter = %options.delimiter);
    let _guard = span.enter();

    let lines = physical_lines(raw);
    let logical = Reassembler::new(IdPrefix::new(options.delimiter))
        .reassemble(&lines, options.header_lines);
    debug!(
        physical_lines = lines.len(),
        logical_records = logical.len(),
        "reassembled records"
    );

    let mut stats = ParseStats {
        physical_lines: lines.len(),
        logical_records: logical.len(),
        ..ParseStats::default()
    };

    let mut records = Vec::with_capacity(logical.len());
    for (idx, text) in logical.iter().enumerate() {
        match map_record(text, options.delimiter) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(record = idx + 1, %error, "skipping unmappable record");
                stats.rejected += 1;
            }
        }
    }

    let mapped = records.len();
    let records = filter_valid_with_range(records, &options.age_range);
    stats.filtered_out = mapped - records.len();

    info!(
        records = records.len(),
        rejected = stats.rejected,
        filtered_out = stats.filtered_out,
        "parsed survey export"
    );
    ParseOutcome { records, stats }
}
