//! Fetch cycle for a status screen.
//!
//! - `StatusFeed::refresh`: fetch once, assemble rows, publish to the screen
//! - `StatusScreen`: state read by the presentation layer

pub mod refresh;

pub use refresh::{RefreshOutcome, ScreenState, StatusFeed, StatusScreen};
