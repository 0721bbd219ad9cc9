// src/core/identity.rs
use std::sync::OnceLock;

use regex::Regex;

/// ASIN segment of a product URL: `/dp/<id>` or `/product/<id>`.
fn asin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(?:dp|product)/([A-Z0-9]{10})").unwrap())
}

/// Pull the 10-character ASIN out of a product link.
///
/// Redirect and ad URLs often carry the real product URL percent-encoded
/// inside a query parameter, so the link is decoded before matching.
pub fn extract_asin(link: &str) -> Option<String> {
    let decoded = match urlencoding::decode(link) {
        Ok(cow) => cow.into_owned(),
        Err(_) => s!(link),
    };
    asin_re()
        .captures(&decoded)
        .and_then(|caps| caps.get(1))
        .map(|m| s!(m.as_str()))
}

/// Canonical identity for reporting: the ASIN when one can be recovered,
/// the full link otherwise.
pub fn product_key(link: &str) -> String {
    extract_asin(link).unwrap_or_else(|| s!(link))
}
