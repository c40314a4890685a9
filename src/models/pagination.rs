//! Pagination metadata and single-page responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::release::ReleaseRecord;

/// Page size used for every collection request
pub const PER_PAGE: u32 = 10;

/// Pagination block of a collection response or backup file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page, 1-based
    pub page: u32,
    /// Total page count as last reported by the server
    pub pages: u32,
    pub per_page: u32,
    /// Total item count, informational only
    pub items: u64,
    /// Navigation links; backups always store an empty object
    #[serde(default)]
    pub urls: Map<String, Value>,
}

impl PaginationState {
    /// Build the state stored in a backup after the last page was fetched
    pub fn finished(page: u32, pages: u32, items: u64) -> Self {
        Self {
            page,
            pages,
            per_page: PER_PAGE,
            items,
            urls: Map::new(),
        }
    }
}

/// One decoded response of the folder releases endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub pagination: PaginationState,
    #[serde(default)]
    pub releases: Vec<ReleaseRecord>,
}
