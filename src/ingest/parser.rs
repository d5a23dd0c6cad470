// src/ingest/parser.rs

use crate::domain::{CommentRecord, RecordCollection};

pub const DELIMITER: char = ';';

/// Parse an exported comment sheet into records.
///
/// - Line 0 is the header; every later non-blank line is one record.
/// - Values are zipped to headers by position. Short rows are padded with
///   empty strings, surplus values are dropped.
/// - Never fails on content: the worst input yields an empty collection.
pub fn parse(raw_text: &str) -> RecordCollection {
    let mut lines = raw_text.split('\n');

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => split_fields(header_line),
        None => return RecordCollection::default(),
    };

    let records = lines
        .filter(|line| !clean(line).is_empty())
        .map(|line| {
            let mut values = split_fields(line).into_iter();
            headers
                .iter()
                .map(|header| (header.clone(), values.next().unwrap_or_default()))
                .collect::<CommentRecord>()
        })
        .collect::<Vec<_>>();

    RecordCollection::new(records)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(|field| clean(field).replace('"', ""))
        .collect()
}

// Spreadsheet exports often lead with a byte-order mark and end lines in \r.
fn clean(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
