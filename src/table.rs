//! Minimal tabular codec for the CSV artifacts.
//!
//! Fields are written fully quoted with embedded quotes doubled; nothing
//! else is treated specially (embedded newlines are out of contract). The
//! reader is line-based and understands the same quoting, so a serialized
//! table re-parses to the original values.

use crate::error::{Result, SiftError};

/// Wraps a field in double quotes, doubling any embedded quote
pub fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Formats one data row: every field quoted, comma separated
pub fn format_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a table: the header line is written as-is, data rows fully quoted
pub fn render(header: &str, rows: &[Vec<String>]) -> String {
    let mut out = String::with_capacity(header.len() + 1 + rows.len() * 32);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_row(&fields));
        out.push('\n');
    }
    out
}

/// Splits one line into fields, honoring quoting
///
/// Quoted fields may contain commas; a doubled quote inside a quoted field
/// decodes to a literal quote. Bare (unquoted) fields are taken verbatim.
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// An in-memory table: a header row plus data rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Column names from the header line
    pub header: Vec<String>,

    /// Data rows, one `Vec` of field values per line
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses CSV text
    ///
    /// The first non-empty line is the header; empty lines are skipped.
    pub fn parse(text: &str) -> Table {
        let mut lines = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty());

        let header = match lines.next() {
            Some(line) => split_row(line),
            None => Vec::new(),
        };
        let rows = lines.map(split_row).collect();

        Table { header, rows }
    }

    /// Index of a named column, if present
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Index of the first present column among `names`
    ///
    /// The schema is resolved once at the input boundary; a table carrying
    /// none of the accepted names is a fatal error reported under the
    /// primary name.
    pub fn require_column(&self, names: &[&'static str]) -> Result<usize> {
        names
            .iter()
            .find_map(|name| self.column(name))
            .ok_or(SiftError::MissingColumn(names[0]))
    }
}
