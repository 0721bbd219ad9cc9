// src/engine/types.rs
use crate::record::Record;

/// A detected price drop for one link.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceAlert {
    pub link: String,
    pub title: String,
    pub old_price: f64,
    pub new_price: f64,
    /// Always `old_price - new_price`, and always positive.
    pub drop: f64,
}

/// What one reconciliation pass produced: alerts to report and the rows
/// to persist. `output` is the input batch, content and order untouched.
#[derive(Clone, Debug, Default)]
pub struct Reconciliation {
    pub alerts: Vec<PriceAlert>,
    pub output: Vec<Record>,
}
