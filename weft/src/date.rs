use anyhow::Result;
use chrono::{DateTime, Utc};

/// Formats a date the way post headers and listings show it: en-US long
/// month, UTC, e.g. `January 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}
