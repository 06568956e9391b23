//! Reading survey exports from disk.
//!
//! Exports come either as UTF-8 or in a legacy single-byte Western
//! encoding. The bytes are decoded as strict UTF-8 first and fall back to
//! Windows-1252, which accepts every byte sequence.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;
use crate::pipeline::{ParseOutcome, parse_with_options};

/// Maximum file size for survey loading (64 MB default).
pub const MAX_SURVEY_FILE_SIZE: u64 = 64 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encoding a survey file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceEncoding {
    Utf8,
    Windows1252,
}

impl SourceEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "UTF-8",
            SourceEncoding::Windows1252 => "windows-1252",
        }
    }
}

/// Decoded survey text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decodes raw bytes, stripping a UTF-8 BOM if present.
pub fn decode_survey_bytes(bytes: &[u8]) -> DecodedText {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return DecodedText {
            text: text.into_owned(),
            encoding: SourceEncoding::Utf8,
        };
    }
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("windows-1252 decoding replaced unmappable bytes");
    }
    DecodedText {
        text: text.into_owned(),
        encoding: SourceEncoding::Windows1252,
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_SURVEY_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads and decodes a survey export.
pub fn read_survey_text(path: &Path) -> Result<DecodedText> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let decoded = decode_survey_bytes(&bytes);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = decoded.encoding.as_str(),
        "decoded survey file"
    );
    Ok(decoded)
}

/// Reads, decodes and parses a survey export.
pub fn load_survey(path: &Path, options: &IngestOptions) -> Result<ParseOutcome> {
    let decoded = read_survey_text(path)?;
    let outcome = parse_with_options(&decoded.text, options);
    info!(
        path = %path.display(),
        records = outcome.records.len(),
        "loaded survey"
    );
    Ok(outcome)
}

fn io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
