// src/report.rs
//! Console-facing formatting: alert blocks, missing-value tallies, and a
//! `Progress` sink that prints them.

use std::collections::HashSet;
use std::fmt;

use crate::config::consts::COLUMNS;
use crate::core::identity;
use crate::engine::types::PriceAlert;
use crate::progress::Progress;
use crate::record::Record;
use crate::runner::RunSummary;

/// Three-line alert block: truncated title, the price movement with the
/// drop to two decimals, then the link.
pub fn format_alert(alert: &PriceAlert, title_snippet: usize) -> String {
    let title: String = alert.title.chars().take(title_snippet).collect();
    format!(
        "Price Drop for: {}...\n  Old Price: {} -> New Price: {} (Drop: {:.2})\n  Link: {}",
        title, alert.old_price, alert.new_price, alert.drop, alert.link
    )
}

/// Number of distinct products in a batch, keyed by ASIN when one can be
/// recovered from the link.
pub fn distinct_products(records: &[Record]) -> usize {
    let keys: HashSet<String> = records.iter().map(|r| identity::product_key(&r.link)).collect();
    keys.len()
}

/// Per-column count of absent values in an output batch: missing
/// timestamp, empty title/rating/link, unknown price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissingSummary {
    pub timestamp: usize,
    pub title: usize,
    pub price: usize,
    pub rating: usize,
    pub link: usize,
}

impl MissingSummary {
    pub fn tally(records: &[Record]) -> Self {
        let mut m = Self::default();
        for r in records {
            if r.observed_at.is_none() { m.timestamp += 1; }
            if r.title.is_empty() { m.title += 1; }
            if r.price.is_none() { m.price += 1; }
            if r.rating.is_empty() { m.rating += 1; }
            if r.link.is_empty() { m.link += 1; }
        }
        m
    }

    pub fn total(&self) -> usize {
        self.timestamp + self.title + self.price + self.rating + self.link
    }
}

impl fmt::Display for MissingSummary {
    /// One line per column, name then count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = [self.timestamp, self.title, self.price, self.rating, self.link];
        for (name, count) in COLUMNS.iter().zip(counts) {
            writeln!(f, "{name:<12} {count}")?;
        }
        Ok(())
    }
}

/// Print the post-save block: where the rows went, the row/column counts,
/// and the missing-value summary.
pub fn print_summary(summary: &RunSummary) {
    if summary.created {
        println!("\nTable successfully saved as '{}'.", summary.path.display());
    } else {
        println!("\nData appended to '{}'.", summary.path.display());
    }
    println!(
        "Table has {} new rows ({} distinct products) and {} columns.",
        summary.appended,
        summary.distinct_products,
        COLUMNS.len()
    );
    println!("\nMissing values:");
    print!("{}", summary.missing);
}

/// Progress sink that prints the run the way the console flow does:
/// status lines as they come, an alert banner before the first drop, one
/// formatted block per drop.
pub struct ConsoleReport {
    title_snippet: usize,
    alerts_seen: usize,
}

impl ConsoleReport {
    pub fn new(title_snippet: usize) -> Self {
        Self { title_snippet, alerts_seen: 0 }
    }
}

impl Progress for ConsoleReport {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn alert(&mut self, alert: &PriceAlert) {
        if self.alerts_seen == 0 {
            println!("\nPRICE DROP ALERTS");
        }
        self.alerts_seen += 1;
        println!("{}\n", format_alert(alert, self.title_snippet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_block_truncates_title_and_formats_drop() {
        let alert = PriceAlert {
            link: s!("https://example.com/dp/B0ABC12345"),
            title: s!("A very long product title that goes on and on well past fifty characters"),
            old_price: 100.0,
            new_price: 80.5,
            drop: 19.5,
        };
        let block = format_alert(&alert, 50);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Price Drop for: A very long product title that goes on and on well...");
        assert_eq!(lines[1], "  Old Price: 100 -> New Price: 80.5 (Drop: 19.50)");
        assert_eq!(lines[2], "  Link: https://example.com/dp/B0ABC12345");
    }

    #[test]
    fn missing_tally_counts_each_column() {
        let records = vec![
            Record::new(None, s!(), s!("Not Available"), s!(), s!("https://x/1")),
            Record::new(
                Record::parse_timestamp("2024-05-01 10:00:00"),
                s!("Widget"),
                s!("$5"),
                s!("4.0"),
                s!("https://x/2"),
            ),
        ];
        let m = MissingSummary::tally(&records);
        assert_eq!(m.timestamp, 1);
        assert_eq!(m.title, 1);
        assert_eq!(m.price, 1);
        assert_eq!(m.rating, 1);
        assert_eq!(m.link, 0);
        assert_eq!(m.total(), 4);

        let shown = m.to_string();
        assert!(shown.contains("timestamp"));
        assert!(shown.lines().count() == COLUMNS.len());
    }

    #[test]
    fn distinct_products_collapses_asin_duplicates() {
        let records = vec![
            Record::new(None, s!("a"), s!("1"), s!(), s!("https://www.amazon.com/dp/B0ABC12345")),
            Record::new(None, s!("b"), s!("2"), s!(), s!("https://www.amazon.com/gp/product/B0ABC12345?th=1")),
            Record::new(None, s!("c"), s!("3"), s!(), s!("https://elsewhere.example/item/42")),
        ];
        assert_eq!(distinct_products(&records), 2);
    }
}
