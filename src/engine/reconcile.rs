// src/engine/reconcile.rs
use std::collections::HashMap;

use super::types::{PriceAlert, Reconciliation};
use crate::record::Record;

/// Index history by link, keeping the most recent observation per link.
///
/// Later timestamps win regardless of file order. Rows without a timestamp
/// rank older than any timestamped row; among themselves, the later file
/// occurrence wins.
pub fn latest_index(history: &[Record]) -> HashMap<&str, &Record> {
    let mut index: HashMap<&str, &Record> = HashMap::new();
    for record in history {
        match index.get(record.link.as_str()) {
            // Option<NaiveDateTime> orders None below any Some
            Some(prev) if record.observed_at < prev.observed_at => {}
            _ => {
                index.insert(record.link.as_str(), record);
            }
        }
    }
    index
}

/// Compare a freshly scraped batch against prior history.
///
/// No history means a first run: no alerts, the whole batch goes to
/// output. Otherwise each batch record whose link has a known prior price
/// is checked, and a strictly lower new price produces one alert carrying
/// `drop = old - new`. Links absent from history, unknown prices on
/// either side, and equal prices never alert.
pub fn reconcile(mut batch: Vec<Record>, history: Option<&[Record]>) -> Reconciliation {
    for record in &mut batch {
        record.ensure_price();
    }

    let Some(history) = history else {
        return Reconciliation { alerts: Vec::new(), output: batch };
    };

    let index = latest_index(history);
    let mut alerts = Vec::new();

    for record in &batch {
        let Some(prev) = index.get(record.link.as_str()) else { continue };
        let (Some(old), Some(new)) = (prev.price, record.price) else { continue };
        if new < old {
            alerts.push(PriceAlert {
                link: record.link.clone(),
                title: record.title.clone(),
                old_price: old,
                new_price: new,
                drop: old - new,
            });
        }
    }

    Reconciliation { alerts, output: batch }
}
