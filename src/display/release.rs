//! Release table formatting
//!
//! Live collections and backup files go through the same projection, so the
//! two `show` commands print identical tables for identical data.

use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::ReleaseRecord;

/// Longest artist or title text shown in a cell
pub const MAX_CELL_CHARS: usize = 60;

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReleaseRow {
    pub artists: String,
    pub title: String,
    pub year: i32,
    pub date_added: String,
}

impl ReleaseRow {
    pub fn from_release(release: &ReleaseRecord) -> Self {
        Self {
            artists: truncate(&release.artist_names(), MAX_CELL_CHARS),
            title: truncate(release.title(), MAX_CELL_CHARS),
            year: release.year(),
            date_added: release.date_added.clone(),
        }
    }
}

/// Keep the first `max` characters, ignoring word boundaries
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Project releases into rows sorted by the raw `date_added` string
///
/// The sort is lexical and stable: rows with the same timestamp keep their
/// input order.
pub fn release_rows(releases: &[ReleaseRecord]) -> Vec<ReleaseRow> {
    let mut rows: Vec<ReleaseRow> = releases.iter().map(ReleaseRow::from_release).collect();
    rows.sort_by(|a, b| a.date_added.cmp(&b.date_added));
    rows
}

/// Format releases as a four-column table
pub fn format_release_table(releases: &[ReleaseRecord]) -> String {
    let mut table = Table::new(release_rows(releases));
    table.with(Style::ascii()).with(Alignment::left());
    table.to_string()
}
