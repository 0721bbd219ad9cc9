// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the history store.
///
/// `Read` and `Schema` downgrade a run to first-run behavior once reported;
/// `Write` is the one failure handed back to the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read history {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("history {} has an unrecognizable shape: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True when the run can continue as if no history existed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StoreError::Write { .. })
    }
}
