//! Survey normalization.
//!
//! Free-text survey answers are mapped onto closed label sets by ordered
//! keyword rules. Matching is case-insensitive and the first matching rule
//! wins, so the order of each rule table matters.
//!
//! Demographic dimensions (gender, relationship model) always resolve to a
//! label once an answer is present. The remaining dimensions yield `None`
//! for answers no rule recognises.

pub mod normalization;
mod record;
pub mod rules;

pub use normalization::{
    Dimension, age_band, normalize_app, normalize_barrier, normalize_composition,
    normalize_frequency, normalize_gender, normalize_looking_for, normalize_or_raw,
    normalize_pay, normalize_relationship, normalize_tried, normalize_where,
};
pub use record::{normalize_record, normalize_records, parse_normalized};
pub use rules::{Rule, first_match};
