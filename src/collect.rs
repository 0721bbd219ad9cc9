// src/collect.rs
use std::collections::HashSet;

use chrono::Local;

use crate::progress::Progress;
use crate::record::Record;

/// Raw field strings for one product, exactly as the page extractor
/// returned them. Missing title/rating come back empty; a missing price
/// comes back as the availability sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    pub title: String,
    pub price: String,
    pub rating: String,
}

/// Extracts the product fields from one rendered page.
/// Implemented outside this crate, next to whatever does the rendering.
pub trait FieldExtractor {
    fn extract(&self, page: &str) -> RawFields;
}

/// Make a scraped href absolute against the site origin.
pub fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        s!(href)
    } else {
        join!(base, href)
    }
}

/// Walk `(link, page)` pairs in order, extract the fields from each page
/// and stamp the observation time. Strictly sequential, so timestamps
/// never run backwards within a batch.
pub fn collect_records<E: FieldExtractor + ?Sized>(
    pages: &[(String, String)],
    extractor: &E,
    progress: &mut dyn Progress,
) -> Vec<Record> {
    progress.begin(pages.len());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut records = Vec::with_capacity(pages.len());

    for (link, page) in pages {
        if !seen.insert(link.as_str()) {
            logd!("Duplicate link in batch: {link}");
        }
        let fields = extractor.extract(page);
        let record = Record::new(
            Some(Local::now().naive_local()),
            fields.title,
            fields.price,
            fields.rating,
            link.clone(),
        );
        progress.log(&format!("Collected {}", record.link));
        records.push(record);
    }

    records
}
