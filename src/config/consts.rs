// src/config/consts.rs

// Source data
pub const PRICE_UNAVAILABLE: &str = "Not Available";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Persisted column order
pub const COLUMNS: [&str; 5] = ["timestamp", "title", "price", "rating", "link"];

// Local cache
pub const STORE_DIR: &str = ".store";

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "watch";

// Alert report
pub const TITLE_SNIPPET: usize = 50;

// Review tone thresholds (mean compound score)
pub const TONE_POSITIVE: f64 = 0.05;
pub const TONE_NEGATIVE: f64 = -0.05;
