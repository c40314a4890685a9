//! discogs-cli - back up, inspect and restore a Discogs collection
//!
//! This library holds the pieces behind the `discogs` binary: it pages
//! through a user's collection, renders releases as a table, writes and
//! reads JSON backups, and adds missing releases back to a live collection.
//!
//! # Architecture
//!
//! - `config`: Config directory and settings
//! - `error`: Custom error types
//! - `models`: Release records, pagination, backup document
//! - `api`: The `CollectionApi` seam and its HTTP client
//! - `services`: Collection fetching and restore logic
//! - `backup`: Backup file reading and writing
//! - `display`: Table and status-line formatting
//! - `export`: CSV/JSON/YAML export of backups
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use discogs_cli::api::DiscogsClient;
//! use discogs_cli::config::Settings;
//! use discogs_cli::services::CollectionService;
//!
//! let settings = Settings::default();
//! let client = DiscogsClient::new(&settings, None)?;
//! let backup = CollectionService::new(&client, settings.max_pages).fetch_collection("alice")?;
//! ```

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

#[cfg(test)]
mod testing;

pub use error::{DiscogsError, DiscogsResult};
