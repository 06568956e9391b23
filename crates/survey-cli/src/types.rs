use std::path::PathBuf;

use survey_ingest::{ParseStats, SourceEncoding};

/// Outcome of `survey parse`, reported after the output is written.
#[derive(Debug)]
pub struct ParseResult {
    pub input: PathBuf,
    pub encoding: SourceEncoding,
    pub stats: ParseStats,
    pub records: usize,
    /// `None` when the output went to stdout.
    pub output: Option<PathBuf>,
}
