//! Outfit record boundary format.
//!
//! An [`OutfitRecord`] is the serialized, persistence-ready representation
//! of a finished composition: the metadata the user entered plus one entry
//! per placed item with its full transform. The outfit service stores the
//! record; a rendering collaborator derives the flat thumbnail from the
//! same entries.
//!
//! # Versioning
//!
//! Records carry a semantic version string. Version 0.x.x is unstable:
//! files may not be compatible between minor versions. Version 1.x.x+
//! (future) will only break on major bumps.

use serde::{Deserialize, Serialize};

use crate::model::PlacedItem;

/// One placed item's snapshot inside an outfit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItemEntry {
    /// Id of the referenced clothing item.
    pub clothing_item_id: String,
    /// Top-left X in canvas units.
    pub x: f32,
    /// Top-left Y in canvas units.
    pub y: f32,
    /// Width in canvas units.
    pub width: f32,
    /// Height in canvas units.
    pub height: f32,
    /// Rotation in degrees.
    pub rotation_degrees: f32,
    /// Stacking order; higher renders on top.
    pub z_index: u32,
}

impl From<&PlacedItem> for PlacedItemEntry {
    fn from(placed: &PlacedItem) -> Self {
        Self {
            clothing_item_id: placed.id().to_string(),
            x: placed.position.x,
            y: placed.position.y,
            width: placed.size.width,
            height: placed.size.height,
            rotation_degrees: placed.rotation,
            z_index: placed.z_index,
        }
    }
}

/// The serialized, persistence-ready representation of a composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    /// Format version for compatibility checking.
    pub version: String,
    /// Outfit title, non-empty after trimming.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional occasion, free text.
    #[serde(default)]
    pub occasion: Option<String>,
    /// Outfit category.
    pub category: String,
    /// Tags in entry order; duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Placed item snapshots in composition order.
    pub items: Vec<PlacedItemEntry>,
}

impl OutfitRecord {
    /// Current version of the record format.
    pub const CURRENT_VERSION: &'static str = "0.1.0";

    /// Major version number for compatibility checking.
    pub const VERSION_MAJOR: u32 = 0;

    /// Minor version number.
    pub const VERSION_MINOR: u32 = 1;

    /// Parse a version string into (major, minor, patch) components.
    ///
    /// Returns None if the version string is invalid.
    pub fn parse_version(version: &str) -> Option<(u32, u32, u32)> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let major = parts[0].parse().ok()?;
        let minor = parts[1].parse().ok()?;
        let patch = parts[2].parse().ok()?;
        Some((major, minor, patch))
    }

    /// Check if a record version is compatible with the current version.
    ///
    /// For version 0.x.x (unstable), only exact minor matches are
    /// compatible. For 1.x.x+, any record with the same major version is.
    pub fn is_version_compatible(version: &str) -> bool {
        let Some((major, minor, _)) = Self::parse_version(version) else {
            return false;
        };
        if Self::VERSION_MAJOR == 0 {
            major == 0 && minor == Self::VERSION_MINOR
        } else {
            major == Self::VERSION_MAJOR
        }
    }

    /// Serialize the record to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(OutfitRecord::parse_version("0.1.0"), Some((0, 1, 0)));
        assert_eq!(OutfitRecord::parse_version("2.10.3"), Some((2, 10, 3)));
        assert_eq!(OutfitRecord::parse_version("1.0"), None);
        assert_eq!(OutfitRecord::parse_version("a.b.c"), None);
    }

    #[test]
    fn test_version_compatibility() {
        assert!(OutfitRecord::is_version_compatible("0.1.0"));
        assert!(OutfitRecord::is_version_compatible("0.1.7"));
        assert!(!OutfitRecord::is_version_compatible("0.2.0"));
        assert!(!OutfitRecord::is_version_compatible("1.0.0"));
        assert!(!OutfitRecord::is_version_compatible("garbage"));
    }
}
