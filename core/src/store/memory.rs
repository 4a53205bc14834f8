// core/src/store/memory.rs
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use super::ProductStore;
use crate::error::CatalogResult;
use crate::model::{Product, ProductDraft};

#[derive(Debug)]
struct Inner {
  rows: BTreeMap<i64, Product>,
  // Last id handed out; ids are never reused, even after a delete.
  last_id: i64,
}

/// In-process `ProductStore` backed by a `BTreeMap`, so `list` is naturally id-ordered.
///
/// Lock guards are never held across an `.await`.
#[derive(Debug)]
pub struct MemoryStore {
  inner: RwLock<Inner>,
}

impl MemoryStore {
  pub fn new() -> Self {
    MemoryStore {
      inner: RwLock::new(Inner {
        rows: BTreeMap::new(),
        last_id: 0,
      }),
    }
  }

  /// Builds a store pre-filled with `drafts`, ids assigned in order from 1.
  pub fn with_rows<I>(drafts: I) -> Self
  where
    I: IntoIterator<Item = ProductDraft>,
  {
    let store = Self::new();
    {
      let mut guard = store.inner.write();
      for draft in drafts {
        guard.last_id += 1;
        let id = guard.last_id;
        guard.rows.insert(id, draft.into_product(id));
      }
    }
    store
  }

  pub fn len(&self) -> usize {
    self.inner.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().rows.is_empty()
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn ping(&self) -> CatalogResult<bool> {
    Ok(true)
  }

  async fn list(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.inner.read().rows.values().cloned().collect())
  }

  async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
    Ok(self.inner.read().rows.get(&id).cloned())
  }

  #[instrument(name = "memory_store::insert", skip(self, draft))]
  async fn insert(&self, draft: &ProductDraft) -> CatalogResult<Product> {
    let mut guard = self.inner.write();
    guard.last_id += 1;
    let product = draft.clone().into_product(guard.last_id);
    guard.rows.insert(product.id, product.clone());
    debug!(id = product.id, "Row inserted.");
    Ok(product)
  }

  #[instrument(name = "memory_store::update", skip(self, draft))]
  async fn update(&self, id: i64, draft: &ProductDraft) -> CatalogResult<Option<Product>> {
    let mut guard = self.inner.write();
    match guard.rows.get_mut(&id) {
      Some(row) => {
        *row = draft.clone().into_product(id);
        Ok(Some(row.clone()))
      }
      None => Ok(None),
    }
  }

  #[instrument(name = "memory_store::delete", skip(self))]
  async fn delete(&self, id: i64) -> CatalogResult<bool> {
    Ok(self.inner.write().rows.remove(&id).is_some())
  }
}
