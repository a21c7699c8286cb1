//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Fixed display offset, falling back to UTC for out-of-range hours
pub fn display_offset(utc_offset_hours: i32) -> FixedOffset {
    FixedOffset::east_opt(utc_offset_hours * 3600)
        .unwrap_or_else(|| Utc.fix())
}

/// `Jun 25, 2025`
pub fn format_short_date(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp.with_timezone(&offset).format("%b %d, %Y").to_string()
}

/// `June 25, 2025`
pub fn format_long_date(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp.with_timezone(&offset).format("%B %d, %Y").to_string()
}

/// `08:00 AM`
pub fn format_time(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp.with_timezone(&offset).format("%I:%M %p").to_string()
}

/// `Jun 25, 2025 to Jun 28, 2025`
pub fn format_date_range(start: DateTime<Utc>, end: DateTime<Utc>, offset: FixedOffset) -> String {
    format!("{} to {}", format_short_date(start, offset), format_short_date(end, offset))
}

/// `08:00 AM to 04:00 PM`
pub fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>, offset: FixedOffset) -> String {
    format!("{} to {}", format_time(start, offset), format_time(end, offset))
}

/// `June 20, 2025 | 09:00 AM`
pub fn format_timestamp(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    format!("{} | {}", format_long_date(timestamp, offset), format_time(timestamp, offset))
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Create a pagination info string
pub fn create_pagination_info(current_page: u32, total_pages: u32, total_items: u64) -> String {
    format!("Page {} of {} ({} total events)", current_page, total_pages.max(1), total_items)
}

/// Ordinal year level label, `1` → `1st Year`
pub fn year_level_label(level: u8) -> String {
    let suffix = match level {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{} Year", level, suffix)
}
