//! Backup files for discogs-cli
//!
//! A backup is one compact JSON document holding the final pagination state
//! and every release of folder 0:
//!
//! ```text
//! {"pagination": {"page": 3, "pages": 3, "per_page": 10, "items": 27, "urls": {}},
//!  "releases": [{"id": 1, "date_added": "...", "basic_information": {...}}, ...]}
//! ```
//!
//! Files are written in one go and are not atomic: an interrupted write can
//! leave a truncated file behind. Each backup is a full snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use discogs_cli::backup::{default_file_name, load_backup, write_backup};
//!
//! let path = default_file_name("alice", chrono::Local::now().date_naive());
//! write_backup(&document, &path)?;
//! let restored = load_backup(&path)?;
//! ```

mod file;

pub use file::{default_file_name, load_backup, write_backup};
