// tests/form_tests.rs
mod common;

use catalog::Product;
use catalog_client::{ClientError, ProductForm};
use common::*;
use serde_json::json;

#[test]
fn test_payload_coerces_numbers_and_validates_on_the_service_side_too() {
  let payload = filled_form("Heritage Oud").to_payload().unwrap();
  assert_eq!(payload.size_ml, Some(json!(50.0)));
  assert_eq!(payload.price_thb, Some(json!(4500.0)));

  let draft = payload.validate().unwrap();
  assert_eq!(draft.name(), "Heritage Oud");
  assert_eq!(draft.image_url(), "");
}

#[test]
fn test_missing_text_fields_are_form_errors() {
  let mut form = filled_form("Heritage Oud");
  form.scent_family.clear();
  match form.to_payload() {
    Err(ClientError::Form(msg)) => assert_eq!(msg, "Name, Collection and Scent Family are required."),
    other => panic!("Expected ClientError::Form, got {:?}", other),
  }
}

#[test]
fn test_from_product_renders_numbers_without_trailing_zeroes() {
  let product = Product {
    id: 3,
    name: "Siam Rain".to_string(),
    collection: "Signature".to_string(),
    scent_family: "Fresh".to_string(),
    size_ml: 30.0,
    price_thb: 2900.5,
    description: String::new(),
    image_url: "https://mithbangkok.com/rain.jpg".to_string(),
  };
  let form = ProductForm::from_product(&product);
  assert_eq!(form.size_ml, "30");
  assert_eq!(form.price_thb, "2900.5");
  assert_eq!(form.image_url, "https://mithbangkok.com/rain.jpg");
}
