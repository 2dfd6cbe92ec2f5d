//! Keyword-based sentiment scoring for customer feedback
//!
//! A deliberately simple heuristic kept separate from churn scoring: it
//! counts positive and negative keywords and maps the balance onto a
//! score in [0, 1], 0.5 being neutral.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "satisfied",
    "love",
    "amazing",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "unhappy",
    "disappointed",
    "hate",
    "worst",
];

/// Overall feedback polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Classify a piece of feedback text.
///
/// Returns the polarity and a score in [0, 1]: above 0.5 is positive,
/// below is negative, exactly 0.5 is neutral. More matched keywords push
/// the score further from neutral.
pub fn analyze_sentiment(text: &str) -> (Sentiment, f64) {
    let lower = text.to_lowercase();

    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive > negative {
        let score = (0.7 + positive as f64 * 0.1).min(1.0);
        (Sentiment::Positive, score)
    } else if negative > positive {
        let score = (0.3 - negative as f64 * 0.1).max(0.0);
        (Sentiment::Negative, score)
    } else {
        (Sentiment::Neutral, 0.5)
    }
}
