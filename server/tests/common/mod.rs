// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, MemoryStore, Product, ProductDraft, ProductPayload, ProductStore};
use catalog_server::{AppConfig, AppState};
use serde_json::{json, Value};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

/// Builds the service under test around `$state` and returns the initialized service.
macro_rules! catalog_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(catalog_server::web::configure_app_routes),
    )
    .await
  };
}

// --- Payloads ---
pub fn heritage_oud_json() -> Value {
  json!({
    "name": "Heritage Oud",
    "collection": "Heritage",
    "scent_family": "Woody",
    "size_ml": 50,
    "price_thb": 4500,
    "description": "Smoked agarwood over Thai jasmine.",
    "image_url": "https://mithbangkok.com/oud.jpg"
  })
}

pub fn draft_named(name: &str) -> ProductDraft {
  let mut value = heritage_oud_json();
  value["name"] = json!(name);
  serde_json::from_value::<ProductPayload>(value)
    .expect("test payload must deserialize")
    .validate()
    .expect("test payload must validate")
}

// --- State Builders ---
pub fn state_with(store: Arc<dyn ProductStore>) -> AppState {
  AppState::new(store, Arc::new(AppConfig::default()))
}

pub fn memory_state(names: &[&str]) -> (AppState, Arc<MemoryStore>) {
  let store = Arc::new(MemoryStore::with_rows(names.iter().map(|n| draft_named(n))));
  (state_with(store.clone()), store)
}

// --- A store that fails every call and counts how often it was reached ---
#[derive(Debug, Default)]
pub struct FailingStore {
  calls: AtomicUsize,
}

impl FailingStore {
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn fail<T>(&self) -> CatalogResult<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(CatalogError::Store {
      source: anyhow::anyhow!("connection refused (db.internal:5432)"),
    })
  }
}

#[async_trait]
impl ProductStore for FailingStore {
  async fn ping(&self) -> CatalogResult<bool> {
    self.fail()
  }

  async fn list(&self) -> CatalogResult<Vec<Product>> {
    self.fail()
  }

  async fn get(&self, _id: i64) -> CatalogResult<Option<Product>> {
    self.fail()
  }

  async fn insert(&self, _draft: &ProductDraft) -> CatalogResult<Product> {
    self.fail()
  }

  async fn update(&self, _id: i64, _draft: &ProductDraft) -> CatalogResult<Option<Product>> {
    self.fail()
  }

  async fn delete(&self, _id: i64) -> CatalogResult<bool> {
    self.fail()
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
