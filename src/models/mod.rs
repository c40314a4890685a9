//! Core data models for discogs-cli
//!
//! Release records, pagination metadata and the backup document that ties
//! them together. These shapes are shared by the live API and backup files.

pub mod backup;
pub mod ids;
pub mod pagination;
pub mod release;

pub use backup::BackupDocument;
pub use ids::ReleaseId;
pub use pagination::{CollectionPage, PaginationState, PER_PAGE};
pub use release::{Artist, BasicInformation, ReleaseRecord};
