//! Release model
//!
//! One entry of a collection folder, as returned by the collection releases
//! endpoint and as stored in backup files. The fields the tool reads are
//! typed; everything else the API sends is kept in `extra` so a backup
//! written from a live response loses nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::ReleaseId;

/// A credited artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Catalog data attached to a collection entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInformation {
    pub title: String,

    /// Release year; the API reports 0 when unknown
    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub artists: Vec<Artist>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One collection entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub id: ReleaseId,

    /// Timestamp string exactly as the API returned it
    #[serde(default)]
    pub date_added: String,

    pub basic_information: BasicInformation,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReleaseRecord {
    /// Create a record with only the fields the tool reads
    pub fn new(
        id: impl Into<ReleaseId>,
        title: impl Into<String>,
        year: i32,
        artists: &[&str],
        date_added: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date_added: date_added.into(),
            basic_information: BasicInformation {
                title: title.into(),
                year,
                artists: artists.iter().map(|name| Artist::new(*name)).collect(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.basic_information.title
    }

    pub fn year(&self) -> i32 {
        self.basic_information.year
    }

    /// Artist names joined by a single space, in credit order
    pub fn artist_names(&self) -> String {
        self.basic_information
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
