//! Strongly-typed ID wrapper for releases
//!
//! Release IDs are the only identity used when comparing a backup with a
//! live collection; a newtype keeps them from being confused with counts,
//! page numbers or instance IDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog ID of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseId(u64);

impl ReleaseId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReleaseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ReleaseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the "r123" form used in discogs.com URLs
        let s = s.strip_prefix('r').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_number() {
        let id = ReleaseId::new(249504);
        assert_eq!(serde_json::to_string(&id).unwrap(), "249504");

        let parsed: ReleaseId = serde_json::from_str("249504").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<ReleaseId>().unwrap(), ReleaseId::new(42));
        assert_eq!("r42".parse::<ReleaseId>().unwrap(), ReleaseId::new(42));
        assert!("abc".parse::<ReleaseId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReleaseId::new(7).to_string(), "7");
    }
}
