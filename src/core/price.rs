// src/core/price.rs
//! Price string normalization.
//!
//! Scraped price cells arrive as display text: currency prefix, thousands
//! separators, or the site's availability sentinel. Whether a price is
//! *known* is decided here, once, and nowhere else downstream.

use crate::config::consts::PRICE_UNAVAILABLE;

/// Parse a raw price cell into its numeric value.
///
/// Returns `None` for the availability sentinel, empty or whitespace-only
/// input, and anything that does not survive as a number once every
/// character except ASCII digits and `.` is stripped. Unparseable is a
/// normal outcome, not an error.
pub fn normalize(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(PRICE_UNAVAILABLE) {
        return None;
    }

    // Drop currency symbols (LKR, $, etc) and separators
    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}
