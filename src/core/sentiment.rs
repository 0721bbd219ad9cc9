// src/core/sentiment.rs
use std::fmt;

use crate::config::consts::{TONE_NEGATIVE, TONE_POSITIVE};

/// Scores one review text as a compound value in -1.0..=1.0.
/// The model behind it lives outside this crate.
pub trait TextClassifier {
    fn score(&self, text: &str) -> f64;
}

/// Aggregate tone of a product's reviews.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewTone {
    Positive,
    Negative,
    Neutral,
    /// Nothing to score: no reviews came back (or the page blocked us).
    Unscored,
}

impl fmt::Display for ReviewTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewTone::Positive => "Positive",
            ReviewTone::Negative => "Negative",
            ReviewTone::Neutral => "Neutral",
            ReviewTone::Unscored => "No Reviews / Blocked",
        };
        f.write_str(s)
    }
}

/// Fold per-review compound scores into one overall tone.
pub fn overall(scores: &[f64]) -> ReviewTone {
    if scores.is_empty() {
        return ReviewTone::Unscored;
    }
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    if avg >= TONE_POSITIVE {
        ReviewTone::Positive
    } else if avg <= TONE_NEGATIVE {
        ReviewTone::Negative
    } else {
        ReviewTone::Neutral
    }
}

/// Score each review with the classifier, then aggregate.
pub fn classify_reviews<C: TextClassifier + ?Sized>(
    classifier: &C,
    reviews: &[String],
) -> ReviewTone {
    let scores: Vec<f64> = reviews.iter().map(|text| classifier.score(text)).collect();
    overall(&scores)
}
