//! Package metadata shared by both writers (`docProps/core.xml`)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// `dcterms:created` layout, UTC only
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Author, language and timestamp stamped into every generated package
///
/// The timestamp is fixed rather than taken from the clock so that two
/// runs over the same content produce byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// `dc:creator` and `cp:lastModifiedBy`
    pub creator: String,
    /// `dc:language` and the `lang` attribute of slide runs
    pub language: String,
    /// W3CDTF timestamp used for `dcterms:created` and `dcterms:modified`
    pub timestamp: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            creator: "FinApp".to_string(),
            language: "pt-BR".to_string(),
            timestamp: "2026-02-01T00:00:00Z".to_string(),
        }
    }
}

impl Metadata {
    /// Check that the timestamp is a real UTC W3CDTF date-time
    pub fn validate(&self) -> Result<()> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| CoreError::InvalidTimestamp(self.timestamp.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Metadata::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_local_time() {
        let meta = Metadata {
            timestamp: "2026-02-01 10:00".to_string(),
            ..Metadata::default()
        };
        let err = meta.validate().unwrap_err();
        assert!(err.to_string().contains("2026-02-01 10:00"));
    }

    #[test]
    fn test_rejects_impossible_date() {
        for timestamp in ["2026-13-45T25:61:99Z", "2026-02-30T00:00:00Z", "2026-02-01T24:00:00Z"] {
            let meta = Metadata {
                timestamp: timestamp.to_string(),
                ..Metadata::default()
            };
            assert!(meta.validate().is_err(), "{timestamp}");
        }
    }

    #[test]
    fn test_accepts_leap_day() {
        let meta = Metadata {
            timestamp: "2028-02-29T23:59:59Z".to_string(),
            ..Metadata::default()
        };
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let meta: Metadata = toml::from_str("creator = \"Equipe FinApp\"").unwrap();
        assert_eq!(meta.creator, "Equipe FinApp");
        assert_eq!(meta.language, "pt-BR");
    }
}
