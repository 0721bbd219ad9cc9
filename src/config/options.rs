// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchOptions {
    pub store: StoreOptions,
    pub report: ReportOptions,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            store: StoreOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub format: Delim,
    out_path: OutputPath,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            format: Delim::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl StoreOptions {
    /// Full path of the output table: dir + stem + format extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse user text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// How many characters of a product title the alert block shows.
    pub title_snippet: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { title_snippet: TITLE_SNIPPET }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
