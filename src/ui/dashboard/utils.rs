//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::format::Direction;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::MarketFetcher => Color::Cyan,
        Worker::Dashboard => Color::Yellow,
    }
}

/// Color of a price move.
pub fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Up => Color::LightGreen,
        Direction::Down => Color::LightRed,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Failed to fetch market data: request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Failed to fetch market data: network error".to_string();
    }
    // Drop the response body, which may be a whole HTML page
    if let Some((_, rest)) = msg.split_once("HTTP error with status ") {
        let status: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        return match status.as_str() {
            "429" => "Failed to fetch market data: rate limited (HTTP 429)".to_string(),
            _ => format!("Failed to fetch market data: HTTP {}", status),
        };
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-09 14:05:59"), "03-09 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Failed to fetch market data: Reqwest error: error sending request for url (https://api.coingecko.com/)"
            ),
            "Failed to fetch market data: network error"
        );
        assert_eq!(
            clean_http_error_message(
                "Failed to fetch market data: HTTP error with status 500: <html>oops</html>"
            ),
            "Failed to fetch market data: HTTP 500"
        );
        assert_eq!(
            clean_http_error_message("Failed to fetch market data: HTTP error with status 429: slow down"),
            "Failed to fetch market data: rate limited (HTTP 429)"
        );
        assert_eq!(clean_http_error_message("Loaded 100 assets"), "Loaded 100 assets");
    }
}
