// src/lib.rs

//! freespace: campus location busyness library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
