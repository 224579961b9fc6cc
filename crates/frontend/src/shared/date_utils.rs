//! Utilities for date formatting
//!
//! Property values carry ISO dates of varying precision (year, month, day or
//! a full timestamp). They are shown as DD.MM.YYYY with the precision kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO date of any precision
///
/// Example: "2024-03-15" -> "15.03.2024", "2024-03" -> "03.2024",
/// "2024" -> "2024", "2024-03-15T14:02:26Z" -> "15.03.2024 14:02".
/// Anything unparsable is returned unchanged.
pub fn format_date(value: &str) -> String {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    if value.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
            return date.format("%m.%Y").to_string();
        }
    }
    value.to_string()
}
