//! Restore service
//!
//! Adds every release of a backup that is missing from the live collection.
//! Identity is the release ID only; titles are carried along for messages.

use tracing::{info, warn};

use super::collection::CollectionService;
use crate::api::CollectionApi;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::{BackupDocument, ReleaseId};

/// What to do when a single add fails, and whether to add at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Continue past failed adds and report them at the end
    pub keep_going: bool,
    /// Report what would be added without touching the collection
    pub dry_run: bool,
}

/// Result of handling one backup release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Already in the live collection, skipped
    AlreadyPresent { id: ReleaseId, title: String },
    /// Added to the live collection
    Added { id: ReleaseId, title: String },
    /// Missing, but not added because of a dry run
    WouldAdd { id: ReleaseId, title: String },
    /// The add request failed and `keep_going` let the restore continue
    Failed {
        id: ReleaseId,
        title: String,
        error: String,
    },
}

/// Summary of a restore run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    pub outcomes: Vec<RestoreOutcome>,
}

impl RestoreReport {
    pub fn added(&self) -> Vec<ReleaseId> {
        self.ids_where(|o| matches!(o, RestoreOutcome::Added { .. }))
    }

    pub fn already_present(&self) -> Vec<ReleaseId> {
        self.ids_where(|o| matches!(o, RestoreOutcome::AlreadyPresent { .. }))
    }

    pub fn would_add(&self) -> Vec<ReleaseId> {
        self.ids_where(|o| matches!(o, RestoreOutcome::WouldAdd { .. }))
    }

    pub fn failed(&self) -> Vec<ReleaseId> {
        self.ids_where(|o| matches!(o, RestoreOutcome::Failed { .. }))
    }

    fn ids_where(&self, pred: impl Fn(&RestoreOutcome) -> bool) -> Vec<ReleaseId> {
        self.outcomes
            .iter()
            .filter(|o| pred(o))
            .map(|o| match o {
                RestoreOutcome::AlreadyPresent { id, .. }
                | RestoreOutcome::Added { id, .. }
                | RestoreOutcome::WouldAdd { id, .. }
                | RestoreOutcome::Failed { id, .. } => *id,
            })
            .collect()
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} added", self.added().len()),
            format!("{} already in collection", self.already_present().len()),
        ];
        let would_add = self.would_add().len();
        if would_add > 0 {
            parts.push(format!("{} would be added", would_add));
        }
        let failed = self.failed().len();
        if failed > 0 {
            parts.push(format!("{} failed", failed));
        }
        format!("Restore finished: {}", parts.join(", "))
    }
}

/// Service that restores a backup into a live collection
pub struct RestoreService<'a, A: CollectionApi + ?Sized> {
    api: &'a A,
    max_pages: u32,
    options: RestoreOptions,
}

impl<'a, A: CollectionApi + ?Sized> RestoreService<'a, A> {
    /// Create a new restore service
    pub fn new(api: &'a A, max_pages: u32, options: RestoreOptions) -> Self {
        Self {
            api,
            max_pages,
            options,
        }
    }

    /// Restore into the collection of the token's account
    ///
    /// `observer` sees every outcome as soon as it happens, so progress is
    /// visible even when the run aborts part way.
    pub fn restore(
        &self,
        backup: &BackupDocument,
        mut observer: impl FnMut(&RestoreOutcome),
    ) -> DiscogsResult<RestoreReport> {
        let identity = self.api.identity()?;
        let username = identity.username;
        let live = CollectionService::new(self.api, self.max_pages).live_release_ids(&username)?;
        info!(
            username = %username,
            live = live.len(),
            backup = backup.len(),
            "Comparing backup with live collection"
        );

        let mut report = RestoreReport::default();

        // The live set is not updated after an add: a release stored twice in
        // the backup (two copies owned) is added twice.
        for release in &backup.releases {
            let id = release.id;
            let title = release.title().to_string();

            let outcome = if live.contains(&id) {
                RestoreOutcome::AlreadyPresent { id, title }
            } else if self.options.dry_run {
                RestoreOutcome::WouldAdd { id, title }
            } else {
                match self.api.add_release(&username, id) {
                    Ok(()) => {
                        info!(release_id = %id, "Added release");
                        RestoreOutcome::Added { id, title }
                    }
                    Err(err) if self.options.keep_going => {
                        warn!(release_id = %id, error = %err, "Failed to add release, continuing");
                        RestoreOutcome::Failed {
                            id,
                            title,
                            error: err.to_string(),
                        }
                    }
                    Err(err) => return Err(err),
                }
            };

            observer(&outcome);
            report.outcomes.push(outcome);
        }

        let failed = report.failed();
        if !failed.is_empty() {
            return Err(DiscogsError::PartialRestore { failed });
        }

        Ok(report)
    }
}
