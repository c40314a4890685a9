//! Backup document model
//!
//! A backup is a full snapshot of folder 0: the final pagination state and
//! every release in the order the API returned them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ids::ReleaseId;
use super::pagination::PaginationState;
use super::release::ReleaseRecord;

/// Top-level persisted unit of the `backup` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub pagination: PaginationState,
    pub releases: Vec<ReleaseRecord>,
}

impl BackupDocument {
    pub fn new(pagination: PaginationState, releases: Vec<ReleaseRecord>) -> Self {
        Self {
            pagination,
            releases,
        }
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Distinct release IDs in the backup
    pub fn release_ids(&self) -> HashSet<ReleaseId> {
        self.releases.iter().map(|r| r.id).collect()
    }
}
