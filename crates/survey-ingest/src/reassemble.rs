//! Regrouping physical lines into logical records.
//!
//! A quoted free-text answer may contain a literal line break, so one
//! respondent can span several physical lines. Every record starts with a
//! numeric id followed by the delimiter; any other line is a continuation
//! of the record being buffered.
//!
//! This is a heuristic: a continuation line that happens to begin with
//! digits and the delimiter is taken as a new record.

use tracing::debug;

use crate::csv::DEFAULT_DELIMITER;

/// Decides whether a physical line opens a new logical record.
pub trait RecordStart {
    fn is_record_start(&self, line: &str) -> bool;
}

impl<F> RecordStart for F
where
    F: Fn(&str) -> bool,
{
    fn is_record_start(&self, line: &str) -> bool {
        self(line)
    }
}

/// Default predicate: one or more ASCII digits immediately followed by the
/// delimiter.
#[derive(Debug, Clone, Copy)]
pub struct IdPrefix {
    delimiter: char,
}

impl IdPrefix {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for IdPrefix {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl RecordStart for IdPrefix {
    fn is_record_start(&self, line: &str) -> bool {
        starts_with_id(line, self.delimiter)
    }
}

/// Returns true when `line` begins with `\d+` followed by `delimiter`.
pub fn starts_with_id(line: &str, delimiter: char) -> bool {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    digits_end > 0 && line[digits_end..].starts_with(delimiter)
}

#[derive(Debug)]
enum State {
    Idle,
    Buffering(String),
}

/// Two-state machine that folds continuation lines into the preceding record.
#[derive(Debug, Clone, Default)]
pub struct Reassembler<P = IdPrefix> {
    start: P,
}

impl<P: RecordStart> Reassembler<P> {
    pub fn new(start: P) -> Self {
        Self { start }
    }

    /// Groups `lines[start..]` into logical records.
    ///
    /// Continuation lines are joined with `\n`. A line that neither starts a
    /// record nor follows an open buffer is dropped.
    pub fn reassemble<S: AsRef<str>>(&self, lines: &[S], start: usize) -> Vec<String> {
        let mut records = Vec::new();
        let mut state = State::Idle;

        for (idx, line) in lines.iter().enumerate().skip(start) {
            let line = line.as_ref();
            let next_starts_record = lines
                .get(idx + 1)
                .is_none_or(|next| self.start.is_record_start(next.as_ref()));

            state = match state {
                State::Buffering(mut buffer) => {
                    buffer.push('\n');
                    buffer.push_str(line);
                    if next_starts_record {
                        records.push(buffer);
                        State::Idle
                    } else {
                        State::Buffering(buffer)
                    }
                }
                State::Idle if self.start.is_record_start(line) => {
                    if next_starts_record {
                        records.push(line.to_string());
                        State::Idle
                    } else {
                        State::Buffering(line.to_string())
                    }
                }
                State::Idle => {
                    debug!(line = idx + 1, "skipping orphan continuation line");
                    State::Idle
                }
            };
        }

        if let State::Buffering(buffer) = state {
            records.push(buffer);
        }
        records
    }
}

/// Reassembles with the default id-prefix predicate and `;` delimiter.
pub fn reassemble<S: AsRef<str>>(lines: &[S], start: usize) -> Vec<String> {
    Reassembler::new(IdPrefix::default()).reassemble(lines, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_id() {
        assert!(starts_with_id("12;abc", ';'));
        assert!(starts_with_id("1;", ';'));
        assert!(!starts_with_id(";12", ';'));
        assert!(!starts_with_id("12 ;abc", ';'));
        assert!(!starts_with_id("12", ';'));
        assert!(!starts_with_id("abc;1", ';'));
        assert!(!starts_with_id("", ';'));
        assert!(starts_with_id("7,x", ','));
    }

    #[test]
    fn test_every_line_is_a_record() {
        let lines = ["1;a", "2;b", "3;c"];
        assert_eq!(reassemble(&lines, 0), vec!["1;a", "2;b", "3;c"]);
    }

    #[test]
    fn test_continuation_is_folded() {
        let lines = ["5;foo", "bar", "6;baz"];
        assert_eq!(reassemble(&lines, 0), vec!["5;foo\nbar", "6;baz"]);
    }

    #[test]
    fn test_open_buffer_is_flushed_at_end() {
        let lines = ["5;\"foo", "bar", "baz"];
        assert_eq!(reassemble(&lines, 0), vec!["5;\"foo\nbar\nbaz"]);
    }

    #[test]
    fn test_start_offset_skips_header() {
        let lines = ["id;question", "\"second header line\"", "1;a"];
        assert_eq!(reassemble(&lines, 2), vec!["1;a"]);
    }

    #[test]
    fn test_orphan_line_is_dropped() {
        let lines = ["orphan", "1;a"];
        assert_eq!(reassemble(&lines, 0), vec!["1;a"]);
    }

    #[test]
    fn test_numeric_continuation_is_misread_as_record() {
        // Known heuristic limit: free text starting with "3;" opens a record.
        let lines = ["1;\"note", "3; things\""];
        assert_eq!(reassemble(&lines, 0), vec!["1;\"note", "3; things\""]);
    }

    #[test]
    fn test_custom_predicate() {
        let reassembler = Reassembler::new(|line: &str| line.starts_with('#'));
        let lines = ["#1", "more", "#2"];
        assert_eq!(reassembler.reassemble(&lines, 0), vec!["#1\nmore", "#2"]);
    }
}
