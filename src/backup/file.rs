//! Reading and writing backup documents

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{DiscogsError, DiscogsResult};
use crate::models::BackupDocument;

/// File name used when `backup` gets no explicit path:
/// `discogs_<user>-<YYYY-MM-DD>.json`
pub fn default_file_name(username: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("discogs_{}-{}.json", username, date.format("%Y-%m-%d")))
}

/// Serialize a backup and write it to `path`, replacing any existing file
pub fn write_backup(document: &BackupDocument, path: &Path) -> DiscogsResult<()> {
    let json = serde_json::to_string(document)
        .map_err(|e| DiscogsError::Write(format!("Failed to serialize backup: {}", e)))?;

    fs::write(path, json).map_err(|e| {
        DiscogsError::Write(format!("Failed to write backup file {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), releases = document.len(), "Wrote backup");
    Ok(())
}

/// Read and decode a backup file
pub fn load_backup(path: &Path) -> DiscogsResult<BackupDocument> {
    let contents = fs::read_to_string(path).map_err(|e| {
        DiscogsError::Io(format!("Failed to read backup file {}: {}", path.display(), e))
    })?;

    let document: BackupDocument = serde_json::from_str(&contents).map_err(|e| {
        DiscogsError::Decode(format!("Failed to parse backup file {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), releases = document.len(), "Loaded backup");
    Ok(document)
}
