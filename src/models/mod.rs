// src/models/mod.rs

//! Domain models for the busyness client.
//!
//! This module contains the data structures shared by the registry,
//! the status client and row assembly.

mod activity;
mod config;
mod location;
mod row;
mod status;

// Re-export all public types
pub use activity::{ActivityTier, StyleTag, classify, classify_average};
pub use config::{ClientConfig, Config, LocationConfig, LoggingConfig};
pub use location::{ImageRef, LocationEntry};
pub use row::{DisplayRow, RowAssembly, RowFailure};
pub use status::{StatusRecord, StatusSnapshot};
