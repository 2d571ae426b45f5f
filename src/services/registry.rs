// src/services/registry.rs

//! Fixed lookup table of known campus locations.

use crate::error::OutOfRangeError;
use crate::models::{Config, ImageRef, LocationEntry};

/// Ordered, immutable table of locations keyed by 1-based id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRegistry {
    entries: Vec<LocationEntry>,
}

impl LocationRegistry {
    /// Build a registry from (name, image) pairs. Ids are assigned 1..=N in order.
    pub fn new<I, N>(locations: I) -> Self
    where
        I: IntoIterator<Item = (N, ImageRef)>,
        N: Into<String>,
    {
        let entries = locations
            .into_iter()
            .zip(1..)
            .map(|((name, image_ref), id)| LocationEntry {
                id,
                name: name.into(),
                image_ref,
            })
            .collect();
        Self { entries }
    }

    /// Build the registry declared in configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .locations
                .iter()
                .map(|l| (l.name.clone(), ImageRef::new(l.image.clone()))),
        )
    }

    /// Look up a location by id.
    pub fn lookup(&self, id: i64) -> Result<&LocationEntry, OutOfRangeError> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| self.entries.get(index))
            .ok_or(OutOfRangeError {
                id,
                len: self.entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
