//! Presence and shape checks applied to request fields before any write.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ApiError;
use crate::slug::slugify;

const SECONDS_PER_MINUTE: i64 = 60;

/// Treat an empty query value the same as a missing one.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a duration given in minutes and return it in seconds.
pub fn duration_seconds(minutes: Option<&str>) -> Result<i64, ApiError> {
    let raw = minutes.unwrap_or_default();
    let minutes: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::invalid_value(raw))?;
    if minutes <= 0 {
        return Err(ApiError::invalid_value(raw));
    }
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or_else(|| ApiError::invalid_value(raw))
}

/// Parse an optional work date. Date-only values mean midnight UTC.
pub fn date_worked(value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    parse_date(raw.trim())
        .map(Some)
        .ok_or_else(|| ApiError::invalid_value(raw))
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Use the explicit slug if given, otherwise derive one from the name.
pub fn slug_or_name(slug: Option<&str>, name: Option<&str>) -> Result<String, ApiError> {
    if let Some(slug) = slug {
        return Ok(slug.to_string());
    }
    name.map(slugify).ok_or_else(|| {
        ApiError::NoNameProvided("a name is required when no slug is given".into())
    })
}

/// Parse a record id taken from a request parameter.
pub fn record_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::invalid_value(raw))
}
