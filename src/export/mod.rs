//! Export module for discogs-cli
//!
//! Re-emits the releases of a backup in other formats:
//! - CSV: one line per release (spreadsheet-compatible)
//! - JSON: pretty-printed release list with export metadata
//! - YAML: the same document, human-readable
//!
//! Exports keep the backup's release order and never truncate text.

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};

use crate::models::{ReleaseId, ReleaseRecord};

pub use self::csv::export_releases_csv;
pub use self::json::{export_releases_json, ReleaseExport};
pub use self::yaml::export_releases_yaml;

/// Flat view of a release shared by all export formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub id: ReleaseId,
    pub artists: String,
    pub title: String,
    pub year: i32,
    pub date_added: String,
}

impl ExportRow {
    pub fn from_release(release: &ReleaseRecord) -> Self {
        Self {
            id: release.id,
            artists: release.artist_names(),
            title: release.title().to_string(),
            year: release.year(),
            date_added: release.date_added.clone(),
        }
    }
}
