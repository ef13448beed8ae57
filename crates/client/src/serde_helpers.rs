//! Serde helpers for backend JSON quirks.
//!
//! Responsibilities:
//! - Accept decimal fields serialized either as JSON numbers or as strings.
//! - Accept timestamps with or without a UTC offset.
//!
//! Invariants / assumptions:
//! - Decimal model fields may be rendered as `"2.50"` strings depending on backend settings.
//! - Timestamps without an offset are interpreted as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

pub fn opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<F64OrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(F64OrString::F64(v)) => Ok(Some(v)),
        Some(F64OrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(F64OrString::String(s)) => s.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
    }
}

/// Timestamps as emitted by the backend, RFC 3339 or naive.
pub mod timestamp {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub(crate) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
    }
}
