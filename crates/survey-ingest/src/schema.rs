//! Positional field schema and the record mapper that consumes it.
//!
//! Column positions are fixed by the export contract. They live in
//! [`RECORD_SCHEMA`] and nowhere else.

use survey_model::RawRecord;
use tracing::trace;

use crate::csv::tokenize_line;
use crate::error::MapError;

/// Secondary delimiter separating the choices of a multi-value answer.
pub const LIST_DELIMITER: char = ';';

/// Token meaning "no answer" inside a multi-value answer.
pub const NO_ANSWER: &str = "-";

/// Target attribute of a [`RawRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Age,
    Gender,
    Relationship,
    Frequency,
    HasTried,
    Barriers,
    LookingFor,
    Composition,
    WhereSearch,
    WouldUseApp,
    WouldPay,
    OpenText,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Age => "age",
            RecordField::Gender => "gender",
            RecordField::Relationship => "relationship",
            RecordField::Frequency => "frequency",
            RecordField::HasTried => "has_tried",
            RecordField::Barriers => "barriers",
            RecordField::LookingFor => "looking_for",
            RecordField::Composition => "composition",
            RecordField::WhereSearch => "where_search",
            RecordField::WouldUseApp => "would_use_app",
            RecordField::WouldPay => "would_pay",
            RecordField::OpenText => "open_text",
        }
    }

    fn assign(self, record: &mut RawRecord, value: FieldValue) -> Result<(), MapError> {
        match (self, value) {
            (RecordField::Id, FieldValue::Id(id)) => record.id = id,
            (RecordField::Age, FieldValue::Age(age)) => record.age = age,
            (RecordField::Gender, FieldValue::Text(text)) => record.gender = text,
            (RecordField::Relationship, FieldValue::Text(text)) => record.relationship = text,
            (RecordField::Frequency, FieldValue::Text(text)) => record.frequency = text,
            (RecordField::HasTried, FieldValue::Text(text)) => record.has_tried = text,
            (RecordField::Barriers, FieldValue::List(items)) => record.barriers = items,
            (RecordField::LookingFor, FieldValue::Text(text)) => record.looking_for = text,
            (RecordField::Composition, FieldValue::List(items)) => record.composition = items,
            (RecordField::WhereSearch, FieldValue::List(items)) => record.where_search = items,
            (RecordField::WouldUseApp, FieldValue::Text(text)) => record.would_use_app = text,
            (RecordField::WouldPay, FieldValue::Text(text)) => record.would_pay = text,
            (RecordField::OpenText, FieldValue::Text(text)) => record.open_text = text,
            (field, _) => {
                return Err(MapError::SchemaMismatch {
                    field: field.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// How a raw field string is turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDecoder {
    /// Leading integer; failure is a [`MapError::InvalidId`].
    Id,
    /// Leading integer; failure or zero becomes absent.
    Age,
    /// Trimmed text.
    Text,
    /// `;`-separated choices, trimmed, empties dropped. `drop_sentinel`
    /// additionally drops the `-` token.
    List { drop_sentinel: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Id(u64),
    Age(Option<i32>),
    Text(String),
    List(Vec<String>),
}

impl FieldDecoder {
    fn decode(self, raw: &str) -> Result<FieldValue, MapError> {
        let value = match self {
            FieldDecoder::Id => FieldValue::Id(decode_id(raw)?),
            FieldDecoder::Age => FieldValue::Age(decode_age(raw)),
            FieldDecoder::Text => FieldValue::Text(raw.trim().to_string()),
            FieldDecoder::List { drop_sentinel } => FieldValue::List(decode_list(raw, drop_sentinel)),
        };
        Ok(value)
    }
}

/// One schema entry: which column feeds which field, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub position: usize,
    pub field: RecordField,
    pub decoder: FieldDecoder,
}

const fn column(position: usize, field: RecordField, decoder: FieldDecoder) -> FieldSpec {
    FieldSpec {
        position,
        field,
        decoder,
    }
}

/// Column layout of the survey export. Positions 1-4 carry form metadata
/// (timestamps, consent) and are not mapped.
pub const RECORD_SCHEMA: &[FieldSpec] = &[
    column(0, RecordField::Id, FieldDecoder::Id),
    column(5, RecordField::Age, FieldDecoder::Age),
    column(6, RecordField::Gender, FieldDecoder::Text),
    column(7, RecordField::Relationship, FieldDecoder::Text),
    column(8, RecordField::Frequency, FieldDecoder::Text),
    column(9, RecordField::HasTried, FieldDecoder::Text),
    column(10, RecordField::Barriers, FieldDecoder::List { drop_sentinel: true }),
    column(11, RecordField::LookingFor, FieldDecoder::Text),
    column(12, RecordField::Composition, FieldDecoder::List { drop_sentinel: true }),
    // The where-to-search answers keep "-"; consumers see it as a value.
    column(13, RecordField::WhereSearch, FieldDecoder::List { drop_sentinel: false }),
    column(14, RecordField::WouldUseApp, FieldDecoder::Text),
    column(15, RecordField::WouldPay, FieldDecoder::Text),
    column(16, RecordField::OpenText, FieldDecoder::Text),
];

/// Tokenizes one logical record and maps it through [`RECORD_SCHEMA`].
pub fn map_record(logical: &str, delimiter: char) -> Result<RawRecord, MapError> {
    let fields = tokenize_line(logical, delimiter);
    map_fields(&fields)
}

/// Maps an already tokenized row. Missing positions decode from `""`.
pub fn map_fields<S: AsRef<str>>(fields: &[S]) -> Result<RawRecord, MapError> {
    map_fields_with_schema(fields, RECORD_SCHEMA)
}

/// Generic mapping routine over any schema table.
pub fn map_fields_with_schema<S: AsRef<str>>(
    fields: &[S],
    schema: &[FieldSpec],
) -> Result<RawRecord, MapError> {
    let mut record = RawRecord::default();
    for entry in schema {
        let raw = fields.get(entry.position).map_or("", |field| field.as_ref());
        let value = entry.decoder.decode(raw)?;
        trace!(field = entry.field.as_str(), ?value, "decoded field");
        entry.field.assign(&mut record, value)?;
    }
    Ok(record)
}

/// Splits off an optional sign and the leading run of ASCII digits.
fn leading_digits(raw: &str) -> Option<(bool, &str)> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    (end > 0).then(|| (negative, &rest[..end]))
}

/// Parses an optional sign and the leading run of ASCII digits, ignoring
/// anything after them. `"30 anys"` parses as 30. A digit run that does not
/// fit an `i64` is `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let (negative, digits) = leading_digits(raw)?;
    let magnitude = digits.parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn decode_id(raw: &str) -> Result<u64, MapError> {
    parse_leading_int(raw)
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| MapError::InvalidId {
            value: raw.to_string(),
        })
}

/// A digit run always yields a known age; values past `i32` saturate so
/// the validity filter still sees them as out of range.
fn decode_age(raw: &str) -> Option<i32> {
    let (negative, digits) = leading_digits(raw)?;
    let magnitude = digits.bytes().fold(0i32, |age, digit| {
        age.saturating_mul(10)
            .saturating_add(i32::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude }).filter(|age| *age != 0)
}

/// Splits a multi-value answer into its trimmed, non-empty choices.
pub fn decode_list(raw: &str, drop_sentinel: bool) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter(|item| !(drop_sentinel && *item == NO_ANSWER))
        .map(str::to_string)
        .collect()
}
