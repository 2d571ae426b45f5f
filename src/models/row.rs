// src/models/row.rs

//! Render-ready rows built from the registry and a status snapshot.

use serde::Serialize;

use crate::error::OutOfRangeError;
use crate::models::{ActivityTier, ImageRef, StatusRecord, StyleTag};

/// One row of the location list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub location_id: i64,
    pub name: String,
    pub image_ref: ImageRef,
    pub max_capacity: i64,
    pub tier: ActivityTier,
    pub label: &'static str,
    pub style: StyleTag,

    /// Source record, handed on when the row is selected
    #[serde(skip)]
    pub record: StatusRecord,
}

/// A record that could not be turned into a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// Index of the record in the input
    pub position: usize,
    pub location_id: i64,
    pub error: OutOfRangeError,
}

/// Result of assembling rows from one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowAssembly {
    pub rows: Vec<DisplayRow>,
    pub failures: Vec<RowFailure>,
}

impl RowAssembly {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
