// src/lib.rs

//! Catalog: domain core of the MITH perfume catalog.
//!
//! This crate owns everything about a catalog entry that does not depend on
//! HTTP or on a particular database:
//!  - The `Product` row and the validated `ProductDraft` written by create/update.
//!  - Validation of raw JSON payloads (`ProductPayload`) into drafts.
//!  - The `ProductStore` trait, the seam between the service and its storage.
//!  - `MemoryStore`, an in-process store used by tests and local runs.

pub mod error;
pub mod model;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{Product, ProductDraft};
pub use crate::store::memory::MemoryStore;
pub use crate::store::ProductStore;
pub use crate::validation::ProductPayload;

/*
    Write path:
    1. A handler receives a `ProductPayload` (every field optional, any JSON type).
    2. `payload.validate()` turns it into a `ProductDraft` or a `CatalogError::Validation`.
    3. Only a draft is ever handed to `ProductStore::insert` / `ProductStore::update`.
*/
