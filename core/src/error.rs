// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A payload was rejected before reaching the store.
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Product with ID {id} not found.")]
    NotFound { id: i64 },

    /// Any failure raised by a `ProductStore` backend.
    #[error("Store operation failed. Source: {source}")]
    Store {
        #[source]
        source: AnyhowError,
    },
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

// Backends surface their own error types through anyhow.
impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    // Avoid Store(Store(...)) when a CatalogError travelled through anyhow.
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => catalog_err,
      Err(other) => CatalogError::Store { source: other },
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
