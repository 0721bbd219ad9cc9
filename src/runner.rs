// src/runner.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::WatchOptions;
use crate::engine;
use crate::error::StoreError;
use crate::progress::Progress;
use crate::record::Record;
use crate::report::{self, MissingSummary};
use crate::store;

/// Summary of what one run produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    /// True when the table was created fresh (header written).
    pub created: bool,
    pub appended: usize,
    pub alerts: usize,
    pub distinct_products: usize,
    pub missing: MissingSummary,
}

/// Top-level runner: reconcile a scraped batch against the stored table,
/// report any price drops, then persist the batch.
///
/// History problems are reported through the progress sink and downgraded
/// to first-run behavior; only a persistence failure comes back as an
/// error. Retry policy is the caller's business.
pub fn run(
    batch: Vec<Record>,
    opts: &WatchOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary, StoreError> {
    let path = opts.store.out_path();
    let delim = opts.store.format;

    progress.begin(batch.len());
    logf!("Run: {} rows -> {}", batch.len(), path.display());

    let history = match store::load_history(&path, delim) {
        Ok(h) => h,
        Err(e) => {
            loge!("History unusable: {e}");
            progress.log(&format!("Could not analyze history: {e}"));
            None
        }
    };
    let had_history = history.is_some();

    let result = engine::reconcile(batch, history.as_deref());

    for alert in &result.alerts {
        logf!(
            "Price drop: {} {} -> {}",
            alert.link, alert.old_price, alert.new_price
        );
        progress.alert(alert);
    }
    if had_history && result.alerts.is_empty() {
        progress.log("No price drops detected compared to the last record.");
    }

    // Existing rows (and their header) are kept by appending; only a
    // missing or empty table gets created fresh.
    let create = !existing_table(&path);
    let persisted = if create {
        store::create_table(&path, &result.output, delim)
    } else {
        store::append_table(&path, &result.output, delim)
    };
    if let Err(e) = persisted {
        loge!("Persist failed: {e}");
        progress.finish();
        return Err(e);
    }

    let summary = RunSummary {
        path,
        created: create,
        appended: result.output.len(),
        alerts: result.alerts.len(),
        distinct_products: report::distinct_products(&result.output),
        missing: MissingSummary::tally(&result.output),
    };
    logf!(
        "Persisted {} rows ({}), {} alert(s)",
        summary.appended,
        if summary.created { "created" } else { "appended" },
        summary.alerts
    );

    progress.finish();
    Ok(summary)
}

/// True when the table already exists with content, so prior rows must be
/// preserved by appending.
fn existing_table(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
