//! Service layer for discogs-cli
//!
//! Collection paging and backup restoration on top of the [`CollectionApi`]
//! seam.
//!
//! [`CollectionApi`]: crate::api::CollectionApi

pub mod collection;
pub mod restore;

pub use collection::CollectionService;
pub use restore::{RestoreOptions, RestoreOutcome, RestoreReport, RestoreService};
