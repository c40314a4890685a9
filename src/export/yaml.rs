//! YAML Export functionality

use std::io::Write;

use super::json::ReleaseExport;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::ReleaseRecord;

/// Export releases to YAML, preceded by a comment header
pub fn export_releases_yaml<W: Write>(releases: &[ReleaseRecord], writer: &mut W) -> DiscogsResult<()> {
    let export = ReleaseExport::from_releases(releases);

    writeln!(writer, "# discogs-cli release export")
        .map_err(|e| DiscogsError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DiscogsError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DiscogsError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DiscogsError::Export(e.to_string()))?;

    Ok(())
}
