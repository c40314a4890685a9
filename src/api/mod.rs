//! Access to the Discogs collection API
//!
//! [`CollectionApi`] names the three upstream operations the commands need.
//! [`DiscogsClient`] implements it over blocking HTTP; services only see the
//! trait, so they run unchanged against in-memory fakes in tests.

mod client;

pub use client::DiscogsClient;

use serde::{Deserialize, Serialize};

use crate::error::DiscogsResult;
use crate::models::{CollectionPage, ReleaseId};

/// Folder every collection fetch reads ("All")
pub const READ_FOLDER_ID: u32 = 0;

/// Folder releases are added to ("Uncategorized"); folder 0 rejects writes
pub const WRITE_FOLDER_ID: u32 = 1;

/// The account a token belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Upstream operations used by the commands
pub trait CollectionApi {
    /// Resolve the user the configured token belongs to
    fn identity(&self) -> DiscogsResult<Identity>;

    /// Fetch one page (1-based) of a user's folder 0 releases
    fn collection_page(&self, username: &str, page: u32, per_page: u32)
        -> DiscogsResult<CollectionPage>;

    /// Add a release to the user's collection
    fn add_release(&self, username: &str, release_id: ReleaseId) -> DiscogsResult<()>;
}
