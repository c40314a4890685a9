//! Collection fetch service
//!
//! Walks every page of a user's folder 0 and assembles a backup document.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::api::CollectionApi;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::{BackupDocument, PaginationState, ReleaseId, PER_PAGE};

/// Service that pages through a collection
pub struct CollectionService<'a, A: CollectionApi + ?Sized> {
    api: &'a A,
    max_pages: u32,
}

impl<'a, A: CollectionApi + ?Sized> CollectionService<'a, A> {
    /// Create a new collection service
    pub fn new(api: &'a A, max_pages: u32) -> Self {
        Self { api, max_pages }
    }

    /// Fetch every release of `username`'s folder 0, in API order
    ///
    /// The total page count is re-read from every response, so a collection
    /// that grows while being fetched is followed to its new end. At most
    /// `max_pages` requests are issued.
    pub fn fetch_collection(&self, username: &str) -> DiscogsResult<BackupDocument> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DiscogsError::Config("User name cannot be empty".into()));
        }

        let mut page = 0;
        let mut pages = 1;
        let mut items = 0;
        let mut requests = 0;
        let mut releases = Vec::new();

        while page < pages {
            if requests >= self.max_pages {
                return Err(DiscogsError::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            let response = self.api.collection_page(username, page + 1, PER_PAGE)?;
            requests += 1;

            pages = response.pagination.pages;
            page = response.pagination.page;
            items = response.pagination.items;
            debug!(page, pages, received = response.releases.len(), "Fetched collection page");

            releases.extend(response.releases);
        }

        info!(username, releases = releases.len(), pages, "Fetched collection");
        Ok(BackupDocument::new(
            PaginationState::finished(page, pages, items),
            releases,
        ))
    }

    /// Resolve the token's account and fetch its collection
    pub fn fetch_own_collection(&self) -> DiscogsResult<(String, BackupDocument)> {
        let identity = self.api.identity()?;
        let collection = self.fetch_collection(&identity.username)?;
        Ok((identity.username, collection))
    }

    /// Release IDs currently in `username`'s collection
    pub fn live_release_ids(&self, username: &str) -> DiscogsResult<HashSet<ReleaseId>> {
        Ok(self.fetch_collection(username)?.release_ids())
    }
}
