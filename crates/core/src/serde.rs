//! Serde helper functions for cloud-function wire quirks.
//!
//! The upstream document store is hand-populated, so optional fields may be
//! absent, empty strings, or the wrong JSON scalar type (years as strings).
//! These helpers keep the record types strict while tolerating that input.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Accepts formats: MM/DD/YYYY (legacy dataset) or YYYY-MM-DD.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(&s, "%m/%d/%Y")
            .or_else(|_| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional year that may arrive as a JSON number or string.
pub fn deserialize_optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Num(i32),
        Text(String),
    }

    let value: Option<YearRepr> = Option::deserialize(deserializer)?;
    match value {
        Some(YearRepr::Num(year)) => Ok(Some(year)),
        Some(YearRepr::Text(s)) if !s.trim().is_empty() => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
