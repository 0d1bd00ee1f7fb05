//! Formatting utilities for CLI output.
//!
//! Provides the textual rendering of looked-up values and styled error
//! labels for the terminal.

use crate::document::Document;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a document value for human-readable CLI output.
///
/// Strings are printed as-is, without quotes, so scripts can consume them
/// directly. Every other value is printed as compact JSON.
///
/// # Arguments
///
/// * `value` - The value to format
///
/// # Examples
///
/// ```
/// use transmogrify::{cli::formatting::format_value, document::Document};
///
/// assert_eq!(format_value(&Document::from("hello")), "hello");
/// assert_eq!(format_value(&Document::from(42_i64)), "42");
/// assert_eq!(format_value(&Document::from(vec![1_i64, 2])), "[1,2]");
/// ```
pub fn format_value(value: &Document) -> String {
    match value {
        Document::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    }
}
