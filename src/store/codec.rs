//! Line codec for the backing file.
//!
//! One record per line, three fields separated by a comma. Fields are escaped with a
//! backslash so that commas and line breaks inside a value survive a round trip:
//!
//! | raw        | on disk |
//! |------------|---------|
//! | `\`        | `\\`    |
//! | `,`        | `\,`    |
//! | line feed  | `\n`    |
//! | carriage return | `\r` |
//!
//! A value without any of those characters is written verbatim, so plain data produces the
//! familiar `101,Jane Doe,88` line and older unescaped files load unchanged.

use crate::error::{Result, RosterError};
use crate::store::Record;

const FIELD_SEPARATOR: char = ',';
const ESCAPE: char = '\\';
const FIELD_COUNT: usize = 3;

/// Encode a record as a single line, without the trailing newline.
pub fn encode(record: &Record) -> String {
    let mut line =
        String::with_capacity(record.roll_no.len() + record.name.len() + record.marks.len() + 2);
    escape_into(&record.roll_no, &mut line);
    line.push(FIELD_SEPARATOR);
    escape_into(&record.name, &mut line);
    line.push(FIELD_SEPARATOR);
    escape_into(&record.marks, &mut line);
    line
}

/// Decode one line into a record.
///
/// `line_number` is 1-based and only used to build the error.
pub fn decode(line: &str, line_number: usize) -> Result<Record> {
    let [roll_no, name, marks]: [String; FIELD_COUNT] =
        split_fields(line)
            .try_into()
            .map_err(|_| RosterError::MalformedRecord {
                line: line_number,
                content: line.to_string(),
            })?;

    Ok(Record {
        roll_no,
        name,
        marks,
    })
}

/// Decode every line of a file body, in order.
pub fn decode_all(content: &str) -> Result<Vec<Record>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| decode(line, idx + 1))
        .collect()
}

/// Result of rewriting a file body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// New file body, newline terminated when non-empty
    pub content: String,
    /// Number of lines whose roll number matched
    pub matched: usize,
}

/// Replace every line whose roll number equals `roll_no` with `replacement`.
///
/// Lines that do not match are copied through as they were read. Every line is validated
/// first, so a malformed body is rejected before anything is produced.
pub fn rewrite_replacing(content: &str, roll_no: &str, replacement: &Record) -> Result<Rewrite> {
    rewrite_lines(content, roll_no, Some(&encode(replacement)))
}

/// Drop every line whose roll number equals `roll_no`.
pub fn rewrite_deleting(content: &str, roll_no: &str) -> Result<Rewrite> {
    rewrite_lines(content, roll_no, None)
}

/// Find the first record with the given roll number, stopping at the first match.
///
/// Lines past the match are not inspected.
pub fn find_first(content: &str, roll_no: &str) -> Result<Option<Record>> {
    for (idx, line) in content.lines().enumerate() {
        let record = decode(line, idx + 1)?;
        if record.roll_no == roll_no {
            return Ok(Some(record));
        }
    }
    Ok(None)
}

fn rewrite_lines(content: &str, roll_no: &str, replacement: Option<&str>) -> Result<Rewrite> {
    let mut output = String::with_capacity(content.len());
    let mut matched = 0;

    for (idx, line) in content.lines().enumerate() {
        let record = decode(line, idx + 1)?;
        if record.roll_no == roll_no {
            matched += 1;
            if let Some(replacement) = replacement {
                output.push_str(replacement);
                output.push('\n');
            }
        } else {
            output.push_str(line);
            output.push('\n');
        }
    }

    Ok(Rewrite {
        content: output,
        matched,
    })
}

fn escape_into(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            ESCAPE => out.push_str("\\\\"),
            FIELD_SEPARATOR => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => match chars.next() {
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(escaped) => current.push(escaped),
                // trailing lone backslash
                None => current.push(ESCAPE),
            },
            FIELD_SEPARATOR => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(roll_no: &str, name: &str, marks: &str) -> Record {
        Record::new(roll_no, name, marks)
    }

    #[test]
    fn plain_records_use_the_bare_format() {
        assert_eq!(encode(&record("101", "Jane Doe", "88")), "101,Jane Doe,88");
        assert_eq!(
            decode("101,Jane Doe,88", 1).unwrap(),
            record("101", "Jane Doe", "88")
        );
    }

    #[test]
    fn embedded_separators_are_escaped() {
        let tricky = record("7", "Doe, Jane", "A\\B\nC");
        let line = encode(&tricky);
        assert_eq!(line, "7,Doe\\, Jane,A\\\\B\\nC");
        assert!(!line.contains('\n'));
        assert_eq!(decode(&line, 1).unwrap(), tricky);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for (line, text) in [(1, "1,Alice"), (2, "1,Alice,80,extra"), (3, "")] {
            match decode(text, line) {
                Err(RosterError::MalformedRecord { line: l, content }) => {
                    assert_eq!(l, line);
                    assert_eq!(content, text);
                }
                other => panic!("expected malformed record, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_fields_are_still_three_fields() {
        assert_eq!(decode(",,", 1).unwrap(), record("", "", ""));
    }

    #[test]
    fn unknown_escapes_and_trailing_backslash_are_lenient() {
        assert_eq!(decode("1,\\q,9\\", 1).unwrap(), record("1", "q", "9\\"));
    }

    #[test]
    fn decode_all_reports_line_numbers() {
        let err = decode_all("1,Alice,80\nbroken\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn decode_all_accepts_crlf() {
        let records = decode_all("1,Alice,80\r\n2,Bob,70\r\n").unwrap();
        assert_eq!(records, vec![record("1", "Alice", "80"), record("2", "Bob", "70")]);
    }

    #[test]
    fn replacing_keeps_order_and_other_lines() {
        let rewrite =
            rewrite_replacing("1,Alice,80\n2,Bob,70\n", "2", &record("2", "Bobby", "75")).unwrap();
        assert_eq!(rewrite.content, "1,Alice,80\n2,Bobby,75\n");
        assert_eq!(rewrite.matched, 1);
    }

    #[test]
    fn deleting_removes_every_match() {
        let rewrite = rewrite_deleting("1,Alice,80\n1,Alice2,90\n2,Bob,70\n", "1").unwrap();
        assert_eq!(rewrite.content, "2,Bob,70\n");
        assert_eq!(rewrite.matched, 2);
    }

    #[test]
    fn rewrite_without_match_reports_zero() {
        let rewrite = rewrite_deleting("1,Alice,80\n", "9").unwrap();
        assert_eq!(rewrite.matched, 0);
        assert_eq!(rewrite.content, "1,Alice,80\n");
    }

    #[test]
    fn rewrite_rejects_malformed_body() {
        assert!(rewrite_deleting("1,Alice,80\noops\n", "1").is_err());
    }

    #[test]
    fn find_first_wins_over_later_duplicates() {
        let found = find_first("1,Alice,80\n1,Alice2,90\n2,Bob,70\n", "1").unwrap();
        assert_eq!(found, Some(record("1", "Alice", "80")));
        assert_eq!(find_first("1,Alice,80\n", "2").unwrap(), None);
    }

    proptest! {
        #[test]
        fn escaping_preserves_arbitrary_fields(
            roll_no in any::<String>(),
            name in any::<String>(),
            marks in any::<String>(),
        ) {
            let original = Record { roll_no, name, marks };
            let line = encode(&original);
            prop_assert!(!line.contains('\n') && !line.contains('\r'));
            prop_assert_eq!(decode(&line, 1).unwrap(), original);
        }
    }
}
