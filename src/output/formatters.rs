//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Format an optional service timestamp as a local date/time string.
///
/// Returns "N/A" when the service did not report one.
///
/// # Example output
/// `2025-01-15 14:30 +01:00`
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M %:z")
            .to_string(),
        None => "N/A".to_string(),
    }
}

/// Format an optional value, using "-" when absent.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Pluralize a count: `1 account`, `3 accounts`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
