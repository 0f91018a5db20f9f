use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of review text, as reported by the external
/// text-analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Error returned when a sentiment label cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sentiment label: {0:?}")]
pub struct ParseSentimentError(pub String);

impl FromStr for Sentiment {
    type Err = ParseSentimentError;

    /// Parses a document-level label from the analysis service.
    /// Labels arrive lowercase on the wire ("positive"); matching is
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseSentimentError(s.to_string())),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        f.write_str(label)
    }
}

impl Sentiment {
    /// Returns true for positive sentiment.
    pub fn is_positive(&self) -> bool {
        matches!(self, Sentiment::Positive)
    }

    /// Returns true for negative sentiment.
    pub fn is_negative(&self) -> bool {
        matches!(self, Sentiment::Negative)
    }
}

/// A customer review with purchase context and its derived sentiment label.
///
/// The sentiment is computed once when the review is read from the review
/// endpoint; it is not re-validated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    /// Id of the dealer this review refers to. No referential-integrity
    /// check is performed in this layer.
    pub dealership: u64,
    /// Reviewer's name.
    pub name: String,
    /// Free-text review body.
    pub review: String,
    /// Whether the reviewer purchased a car from the dealer.
    pub purchase: bool,
    pub purchase_date: Option<NaiveDate>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
    pub sentiment: Sentiment,
}
