//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::render::StatColor;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity log entry based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Controller => Color::Yellow,
        Source::Network => Color::Cyan,
        Source::Renderer => Color::Green,
    }
}

/// Map a stat colour class to the terminal palette
pub fn stat_color(color: StatColor) -> Color {
    match color {
        StatColor::Green => Color::LightGreen,
        StatColor::Red => Color::LightRed,
        StatColor::Yellow => Color::LightYellow,
        StatColor::Blue => Color::LightBlue,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        // MM-DD and HH:MM:SS
        if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, clock);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten transport errors for the activity log
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "Network error - is the analysis backend running?".to_string();
    }
    if msg.contains("operation timed out") {
        return "Request timed out".to_string();
    }
    msg.to_string()
}
