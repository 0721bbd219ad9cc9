// src/record.rs
use chrono::NaiveDateTime;

use crate::config::consts::TIMESTAMP_FMT;
use crate::core::price;

/// One scraped product observation.
///
/// `price_raw` holds the cell exactly as extracted (or the availability
/// sentinel) and is what gets persisted; `price` is its parsed value,
/// derived once by the normalizer. `link` doubles as the identity key
/// when comparing against history.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub observed_at: Option<NaiveDateTime>,
    pub title: String,
    pub price_raw: String,
    pub price: Option<f64>,
    pub rating: String,
    pub link: String,
}

impl Record {
    pub fn new(
        observed_at: Option<NaiveDateTime>,
        title: String,
        price_raw: String,
        rating: String,
        link: String,
    ) -> Self {
        let price = price::normalize(&price_raw);
        Self { observed_at, title, price_raw, price, rating, link }
    }

    /// Re-derive `price` from `price_raw` if it was never set.
    pub fn ensure_price(&mut self) {
        if self.price.is_none() {
            self.price = price::normalize(&self.price_raw);
        }
    }

    /// Wire form of the observation time; empty when unknown.
    pub fn timestamp_string(&self) -> String {
        match self.observed_at {
            Some(t) => t.format(TIMESTAMP_FMT).to_string(),
            None => s!(),
        }
    }

    pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FMT).ok()
    }

    /// Row in persisted column order: timestamp, title, price, rating, link.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp_string(),
            self.title.clone(),
            self.price_raw.clone(),
            self.rating.clone(),
            self.link.clone(),
        ]
    }
}
