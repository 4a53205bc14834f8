// client/src/lib.rs

//! Client side of the MITH perfume catalog.
//!
//! `HttpCatalogApi` talks to the catalog service; `CatalogSession` keeps the
//! last fetched rows and a create/edit form on top of any `CatalogApi`.

pub mod api;
pub mod error;
pub mod form;
pub mod session;

pub use crate::api::{CatalogApi, HealthStatus, HttpCatalogApi};
pub use crate::error::{ClientError, ClientResult};
pub use crate::form::{FormMode, ProductForm};
pub use crate::session::CatalogSession;
