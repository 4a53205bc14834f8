// server/src/lib.rs

//! HTTP service for the MITH perfume catalog.
//!
//! `main.rs` wires these modules to a Postgres pool; tests wire them to a
//! `catalog::MemoryStore` instead.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
