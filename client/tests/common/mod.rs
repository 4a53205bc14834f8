// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{CatalogError, MemoryStore, Product, ProductPayload, ProductStore};
use catalog_client::{CatalogApi, ClientError, ClientResult, HealthStatus, ProductForm};
use parking_lot::Mutex;
use serde_json::json;
use tracing::Level;

/// In-process stand-in for the service: same validation, same status codes,
/// backed by a `MemoryStore`. Can be told to fail the next call.
#[derive(Default)]
pub struct FakeApi {
  pub store: MemoryStore,
  fail_next: Mutex<Option<u16>>,
  pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
  pub fn seeded(names: &[&str]) -> Self {
    let drafts = names.iter().map(|n| {
      let payload: ProductPayload = serde_json::from_value(json!({
        "name": n,
        "collection": "Signature",
        "scent_family": "Floral",
        "size_ml": 50,
        "price_thb": 3500
      }))
      .unwrap();
      payload.validate().unwrap()
    });
    Self {
      store: MemoryStore::with_rows(drafts),
      ..Default::default()
    }
  }

  pub fn fail_next_with(&self, status: u16) {
    *self.fail_next.lock() = Some(status);
  }

  pub fn call_log(&self) -> Vec<String> {
    self.calls.lock().clone()
  }

  fn enter(&self, call: &str) -> ClientResult<()> {
    self.calls.lock().push(call.to_string());
    match self.fail_next.lock().take() {
      Some(status) => Err(ClientError::Api {
        status,
        message: "Internal Server Error".to_string(),
      }),
      None => Ok(()),
    }
  }
}

fn to_client(err: CatalogError) -> ClientError {
  let status = match &err {
    CatalogError::Validation(_) => 400,
    CatalogError::NotFound { .. } => 404,
    CatalogError::Store { .. } => 500,
  };
  let message = match err {
    CatalogError::Validation(m) => m,
    other => other.to_string(),
  };
  ClientError::Api { status, message }
}

#[async_trait]
impl CatalogApi for FakeApi {
  async fn health(&self) -> ClientResult<HealthStatus> {
    self.enter("health")?;
    Ok(HealthStatus {
      status: "ok".to_string(),
      db: true,
    })
  }

  async fn list(&self) -> ClientResult<Vec<Product>> {
    self.enter("list")?;
    self.store.list().await.map_err(to_client)
  }

  async fn get(&self, id: i64) -> ClientResult<Product> {
    self.enter("get")?;
    self
      .store
      .get(id)
      .await
      .map_err(to_client)?
      .ok_or_else(|| to_client(CatalogError::NotFound { id }))
  }

  async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
    self.enter("create")?;
    let draft = payload.validate().map_err(to_client)?;
    self.store.insert(&draft).await.map_err(to_client)
  }

  async fn update(&self, id: i64, payload: &ProductPayload) -> ClientResult<Product> {
    self.enter("update")?;
    let draft = payload.validate().map_err(to_client)?;
    self
      .store
      .update(id, &draft)
      .await
      .map_err(to_client)?
      .ok_or_else(|| to_client(CatalogError::NotFound { id }))
  }

  async fn delete(&self, id: i64) -> ClientResult<()> {
    self.enter("delete")?;
    if self.store.delete(id).await.map_err(to_client)? {
      Ok(())
    } else {
      Err(to_client(CatalogError::NotFound { id }))
    }
  }
}

pub fn filled_form(name: &str) -> ProductForm {
  ProductForm {
    name: name.to_string(),
    collection: "Heritage".to_string(),
    scent_family: "Woody".to_string(),
    size_ml: "50".to_string(),
    price_thb: "4500".to_string(),
    description: "Smoked agarwood.".to_string(),
    image_url: String::new(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
