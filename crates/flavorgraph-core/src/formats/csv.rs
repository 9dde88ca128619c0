//! # CSV Codec
//!
//! Minimal RFC-4180-style CSV parsing and writing for the stage tables.
//!
//! Quoted fields may contain commas, quotes (doubled), and newlines. The
//! first record is the header; rows are exposed as name -> value maps so
//! consumers tolerate column reordering and optional columns.

use crate::types::FlavorError;
use std::collections::BTreeMap;

/// Parse CSV text into header-keyed rows.
///
/// Blank records are skipped. An unterminated quoted field is an error
/// naming the line it started on.
pub fn parse_rows(text: &str) -> Result<Vec<BTreeMap<String, String>>, FlavorError> {
    let records = parse_records(text)?;
    let mut iter = records.into_iter();
    let Some(header) = iter.next() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for record in iter {
        let mut row = BTreeMap::new();
        for (idx, cell) in record.into_iter().enumerate() {
            if let Some(name) = header.get(idx) {
                row.insert(name.clone(), cell);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Parse CSV text into raw records (no header interpretation).
fn parse_records(text: &str) -> Result<Vec<Vec<String>>, FlavorError> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0usize;
    let mut line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => {
                in_quotes = true;
                quote_line = line;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\r' => {
                // swallowed; \r\n is handled by the \n branch
            }
            '\n' => {
                line += 1;
                record.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(FlavorError::MalformedTable {
            line: quote_line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }
    Ok(records)
}

/// Keep a record unless it is entirely empty (blank line).
fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    if record.iter().any(|cell| !cell.is_empty()) {
        records.push(record);
    }
}

/// Write rows under the given header, quoting where required.
#[must_use]
pub fn write_rows<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();
    out.push_str(
        &headers
            .iter()
            .map(|h| quote_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');
    for row in rows {
        out.push_str(
            &row.iter()
                .map(|c| quote_cell(c))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push('\n');
    }
    out
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================
