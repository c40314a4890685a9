//! Display formatting for terminal output
//!
//! Release tables plus the colored one-line status messages the commands
//! print.

pub mod release;

use crossterm::style::{style, Stylize};

pub use release::{format_release_table, release_rows, truncate, ReleaseRow};

/// Green confirmation line
pub fn success_line(message: &str) -> String {
    style(message).green().to_string()
}

/// Yellow warning line
pub fn warning_line(message: &str) -> String {
    style(message).yellow().to_string()
}

/// Red error line
pub fn error_line(message: &str) -> String {
    style(message).red().to_string()
}

/// Message for a backup release that the live collection already holds
pub fn already_in_collection(title: &str) -> String {
    format!("\"{}\" already in collection", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_in_collection_message() {
        assert_eq!(
            already_in_collection("Kid A"),
            "\"Kid A\" already in collection"
        );
    }

    #[test]
    fn test_styled_lines_keep_text() {
        assert!(success_line("Backup successfully saved to x.json").contains("Backup successfully saved to x.json"));
        assert!(warning_line("careful").contains("careful"));
        assert!(error_line("ERROR: boom").contains("ERROR: boom"));
    }
}
