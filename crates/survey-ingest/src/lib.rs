//! Survey export ingestion.
//!
//! This crate turns a semi-structured, delimiter-separated survey export
//! into typed [`RawRecord`]s.
//!
//! # Features
//!
//! - **Tokenizing**: Quote-aware field splitting with a configurable delimiter
//! - **Reassembly**: Regrouping records whose quoted answers span several lines
//! - **Mapping**: Fixed-position schema from fields to record attributes
//! - **Filtering**: Dropping records with an implausible age
//! - **Loading**: Reading files with UTF-8 / Windows-1252 decoding
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::{IngestOptions, load_survey, parse};
//!
//! let records = parse(&raw_text);
//! let outcome = load_survey(Path::new("data/enquesta.csv"), &IngestOptions::default())?;
//! ```

pub mod csv;
mod error;
pub mod filter;
pub mod loader;
pub mod options;
pub mod pipeline;
pub mod reassemble;
pub mod schema;

pub use survey_model::RawRecord;

// === Error Types ===
pub use error::{IngestError, MapError, Result};

// === Tokenizing & Reassembly ===
pub use csv::{DEFAULT_DELIMITER, tokenize_default, tokenize_line};
pub use reassemble::{IdPrefix, Reassembler, RecordStart, reassemble, starts_with_id};

// === Mapping & Filtering ===
pub use filter::{filter_valid, filter_valid_with_range, is_valid};
pub use schema::{
    FieldDecoder, FieldSpec, NO_ANSWER, RECORD_SCHEMA, RecordField, decode_list, map_fields,
    map_record,
};

// === Pipeline ===
pub use loader::{DecodedText, SourceEncoding, decode_survey_bytes, load_survey, read_survey_text};
pub use options::{AgeRange, IngestOptions};
pub use pipeline::{ParseOutcome, ParseStats, parse, parse_with_options, physical_lines};
