// core/src/store/mod.rs

//! Storage seam for catalog rows.

pub mod memory;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::model::{Product, ProductDraft};

/// Persistence operations the service needs. One call maps to one statement;
/// implementations must not retry.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Liveness probe. `Ok(true)` when the backend answered.
  async fn ping(&self) -> CatalogResult<bool>;

  /// All rows, ordered by `id` ascending.
  async fn list(&self) -> CatalogResult<Vec<Product>>;

  async fn get(&self, id: i64) -> CatalogResult<Option<Product>>;

  /// Inserts a row and returns it with its newly assigned id.
  async fn insert(&self, draft: &ProductDraft) -> CatalogResult<Product>;

  /// Full overwrite of an existing row. `Ok(None)` if `id` does not exist.
  async fn update(&self, id: i64, draft: &ProductDraft) -> CatalogResult<Option<Product>>;

  /// `Ok(false)` if `id` does not exist.
  async fn delete(&self, id: i64) -> CatalogResult<bool>;
}
