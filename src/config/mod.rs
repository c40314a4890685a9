//! Configuration module for discogs-cli
//!
//! - Config directory resolution
//! - User settings persistence and override merging

pub mod paths;
pub mod settings;

pub use paths::CliPaths;
pub use settings::Settings;
