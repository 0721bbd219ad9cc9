// src/store.rs
//! Reading and writing the persisted price table.
//!
//! The table is this system's only durable state: one row per observation,
//! appended run after run. Loading tolerates tables from older runs (no
//! header, no timestamp column); writing never touches rows that are
//! already there.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::consts::COLUMNS;
use crate::csv::{detect_headers, parse_rows, Delim};
use crate::error::StoreError;
use crate::file::{append_rows, write_table_start};
use crate::record::Record;

/// Where each record field sits in a history row.
struct ColumnMap {
    timestamp: Option<usize>,
    title: usize,
    price: usize,
    rating: usize,
    link: usize,
}

impl ColumnMap {
    /// Positional fallback for headerless tables: five columns include a
    /// leading timestamp, four do not.
    fn positional(width: usize) -> Option<Self> {
        match width {
            5 => Some(Self { timestamp: Some(0), title: 1, price: 2, rating: 3, link: 4 }),
            4 => Some(Self { timestamp: None, title: 0, price: 1, rating: 2, link: 3 }),
            _ => None,
        }
    }

    fn from_header(header: &[String]) -> Option<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        Some(Self {
            timestamp: find("timestamp"),
            title: find("title")?,
            price: find("price")?,
            rating: find("rating")?,
            link: find("link")?,
        })
    }

    /// None when the row is too short for the mapped columns.
    fn record(&self, row: &[String]) -> Option<Record> {
        let observed_at = self
            .timestamp
            .and_then(|i| row.get(i))
            .and_then(|cell| Record::parse_timestamp(cell));
        Some(Record::new(
            observed_at,
            row.get(self.title)?.clone(),
            row.get(self.price)?.clone(),
            row.get(self.rating)?.clone(),
            row.get(self.link)?.clone(),
        ))
    }
}

/// Load prior observations from `path`.
///
/// An absent file is a normal first run (`Ok(None)`). An unreadable file
/// or an unrecognizable column shape is an error for the caller to report;
/// rows that are merely short are skipped with a log line.
pub fn load_history(path: &Path, delim: Delim) -> Result<Option<Vec<Record>>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::Read { path: path.to_path_buf(), source: e }),
    };

    let rows = parse_rows(&text, delim);
    let (headers, rows) = detect_headers(rows);
    if rows.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let map = match &headers {
        Some(h) => ColumnMap::from_header(h),
        None => ColumnMap::positional(rows[0].len()),
    };
    let Some(map) = map else {
        return Err(StoreError::Schema {
            path: path.to_path_buf(),
            reason: match headers {
                Some(h) => format!("header row {h:?} is missing required columns"),
                None => format!("{} columns and no header row", rows[0].len()),
            },
        });
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match map.record(row) {
            Some(r) => records.push(r),
            None => logd!("Skipping short row {} in {}", i + 1, path.display()),
        }
    }
    Ok(Some(records))
}

/// The persisted header row, owned.
pub fn header_row() -> Vec<String> {
    COLUMNS.iter().map(|c| s!(*c)).collect()
}

/// Create the table fresh: header first, then the batch.
pub fn create_table(path: &Path, records: &[Record], delim: Delim) -> Result<(), StoreError> {
    let header = header_row();
    let rows: Vec<Vec<String>> = records.iter().map(Record::to_row).collect();
    write_table_start(path, Some(header.as_slice()), delim)
        .map_err(|e| StoreError::Write { path: path.to_path_buf(), source: e })?;
    append_rows(path, &rows, delim)
        .map_err(|e| StoreError::Write { path: path.to_path_buf(), source: e })?;
    Ok(())
}

/// Append the batch to an existing table. No header, prior rows untouched.
pub fn append_table(path: &Path, records: &[Record], delim: Delim) -> Result<(), StoreError> {
    let rows: Vec<Vec<String>> = records.iter().map(Record::to_row).collect();
    append_rows(path, &rows, delim)
        .map_err(|e| StoreError::Write { path: path.to_path_buf(), source: e })?;
    Ok(())
}
