//! CSV Export functionality

use std::io::Write;

use super::ExportRow;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::ReleaseRecord;

/// Export releases to CSV with a header row
pub fn export_releases_csv<W: Write>(releases: &[ReleaseRecord], writer: &mut W) -> DiscogsResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for release in releases {
        csv_writer
            .serialize(ExportRow::from_release(release))
            .map_err(|e| DiscogsError::Export(e.to_string()))?;
    }

    // An empty export still gets its header
    if releases.is_empty() {
        csv_writer
            .write_record(["id", "artists", "title", "year", "date_added"])
            .map_err(|e| DiscogsError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DiscogsError::Export(e.to_string()))?;
    Ok(())
}
