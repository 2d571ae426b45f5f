//! Service layer for the busyness client.
//!
//! This module contains the business logic for:
//! - Location lookup (`LocationRegistry`)
//! - Row assembly (`build_rows`)
//! - Status fetching (`StatusSource`, `HttpStatusSource`)

mod registry;
mod rows;
mod status;

pub use registry::LocationRegistry;
pub use rows::build_rows;
pub use status::{HttpStatusSource, StatusSource};
