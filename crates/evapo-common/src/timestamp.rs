//! Creation timestamps for stored records.
//!
//! Timestamps are generated with microsecond precision and written as RFC 3339 with
//! exactly six fractional digits and a `Z` suffix. Fixed width keeps lexicographic
//! order equal to chronological order, which the store relies on for sorting, and
//! microsecond precision makes the string round-trip lossless.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::{EvapoError, Result};

/// Current UTC time, truncated to what the stored representation can carry.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Formats a timestamp in the stored representation.
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses any RFC 3339 timestamp back to UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| EvapoError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Serde adapter: `#[serde(with = "evapo_common::timestamp::iso8601")]`
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(timestamp))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(de::Error::custom)
    }
}
