// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::COLUMNS;

/// Field separator for the supported table flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn char(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.char();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Treat the first row as a header when any of its cells names a known column.
pub fn detect_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() { return (None, rows); }
    let looks_like_header = rows[0]
        .iter()
        .any(|cell| COLUMNS.iter().any(|name| cell.trim().eq_ignore_ascii_case(name)));
    if looks_like_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn parses_quoted_commas_and_escaped_quotes() {
        let text = "a,\"b,c\",\"say \"\"hi\"\"\"\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(rows, vec![row(&["a", "b,c", "say \"hi\""])]);
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let text = "a,b\r\n\r\nc,d\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn quoted_newline_stays_in_field() {
        let text = "a,\"line1\nline2\",b\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(rows, vec![row(&["a", "line1\nline2", "b"])]);
    }

    #[test]
    fn missing_trailing_newline_still_yields_row() {
        let rows = parse_rows("a,b", Delim::Csv);
        assert_eq!(rows, vec![row(&["a", "b"])]);
    }

    #[test]
    fn tsv_ignores_commas() {
        let rows = parse_rows("a,b\tc\n", Delim::Tsv);
        assert_eq!(rows, vec![row(&["a,b", "c"])]);
    }

    #[test]
    fn write_row_quotes_only_when_needed() {
        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, &row(&["plain", "with,comma", "with \"quote\""]), Delim::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"with \"\"quote\"\"\"\n"
        );
    }

    #[test]
    fn write_then_parse_round_trips() {
        let original = vec![row(&["2024-05-01 10:00:00", "RAM, 16GB \"fast\"", "$79.99", "", "https://x"])];
        let mut buf: Vec<u8> = Vec::new();
        for r in &original {
            write_row(&mut buf, r, Delim::Csv).unwrap();
        }
        let parsed = parse_rows(&String::from_utf8(buf).unwrap(), Delim::Csv);
        assert_eq!(parsed, original);
    }

    #[test]
    fn header_detected_by_known_column_name() {
        let rows = vec![row(&["timestamp", "title", "price", "rating", "link"]), row(&["", "a", "1", "", "l"])];
        let (h, body) = detect_headers(rows);
        assert_eq!(h, Some(row(&["timestamp", "title", "price", "rating", "link"])));
        assert_eq!(body.len(), 1);

        let rows = vec![row(&["", "a", "1", "", "l"])];
        let (h, body) = detect_headers(rows);
        assert_eq!(h, None);
        assert_eq!(body.len(), 1);
    }
}
