//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Replace every character with a bullet, for password fields
pub fn mask_secret(value: &str) -> String {
    "•".repeat(value.chars().count())
}
