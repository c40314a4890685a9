//! JSON Export functionality

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExportRow;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::ReleaseRecord;

/// Export document written by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub release_count: usize,

    pub releases: Vec<ExportRow>,
}

impl ReleaseExport {
    pub fn from_releases(releases: &[ReleaseRecord]) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            release_count: releases.len(),
            releases: releases.iter().map(ExportRow::from_release).collect(),
        }
    }
}

/// Export releases as pretty-printed JSON
pub fn export_releases_json<W: Write>(releases: &[ReleaseRecord], writer: &mut W) -> DiscogsResult<()> {
    let export = ReleaseExport::from_releases(releases);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| DiscogsError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DiscogsError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json() {
        let releases = vec![
            ReleaseRecord::new(5u64, "Second Toughest", 1986, &["Butthole Surfers"], "2018-03-03"),
        ];
        let mut out = Vec::new();
        export_releases_json(&releases, &mut out).unwrap();

        let parsed: ReleaseExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.release_count, 1);
        assert_eq!(parsed.releases[0].id.get(), 5);
        assert_eq!(parsed.releases[0].artists, "Butthole Surfers");
        assert_eq!(parsed.app_version, env!("CARGO_PKG_VERSION"));
    }
}
