//! Location registry entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a location's image asset.
///
/// The presentation layer decides what the string means (bundled asset
/// path, remote URL, resource key); the core only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A known campus location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Stable 1-based id, matches the status service's `locationid`
    pub id: i64,

    /// Display name (e.g., "Commons Dining Hall")
    pub name: String,

    /// Image shown behind the location title
    pub image_ref: ImageRef,
}
