//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Section;
use ratatui::prelude::Color;

/// Get a ratatui color for an event's originating section
pub fn get_section_color(section: &Section) -> Color {
    match section {
        Section::Profile => Color::Magenta,
        Section::Modules => Color::Cyan,
        Section::Progress => Color::LightBlue,
        Section::Points => Color::Yellow,
        Section::Lesson => Color::Green,
        Section::Quiz => Color::LightGreen,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("reqwest::Error") && msg.contains("ConnectTimeout") {
        return "Connection timeout".to_string();
    }
    if msg.contains("reqwest::Error") && msg.contains("TimedOut") {
        return "Request timed out".to_string();
    }
    if msg.contains("reqwest::Error") {
        return "Network error".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}
