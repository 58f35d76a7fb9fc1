//! Lenient parsing for client-supplied dates.
//!
//! Output is always RFC 3339 UTC (chrono's default serde). Input may be RFC 3339 with
//! any offset, a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC, or a bare date taken as
//! midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

pub fn parse_flexible(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid date '{}', expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
            raw
        ))
    })
}
