// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a backend timestamp as a calendar date (`YYYY-MM-DD`).
///
/// Accepts RFC3339 and zone-less ISO 8601 timestamps (with or without
/// fractional seconds) and bare dates. Anything else is returned as-is.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.date_naive().to_string();
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return date.date().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2024-01-15T10:00:00Z"), "2024-01-15");
        assert_eq!(display_date("2024-01-15T10:00:00.123456"), "2024-01-15");
        assert_eq!(display_date("2024-01-15T10:00:00"), "2024-01-15");
        assert_eq!(display_date("2024-01-15"), "2024-01-15");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
