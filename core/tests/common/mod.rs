// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{ProductDraft, ProductPayload};
use serde_json::{json, Value};
use tracing::Level;

// --- Common Payloads ---
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

pub fn payload_from(value: Value) -> ProductPayload {
  serde_json::from_value(value).expect("test payload must deserialize")
}

pub fn draft_from(value: Value) -> ProductDraft {
  payload_from(value).validate().expect("test payload must validate")
}

pub fn heritage_oud() -> ProductDraft {
  draft_from(heritage_oud_json())
}

pub fn draft_named(name: &str) -> ProductDraft {
  let mut value = heritage_oud_json();
  value["name"] = json!(name);
  draft_from(value)
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
