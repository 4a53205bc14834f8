// client/src/form.rs

use catalog::validation::coerce_number;
use catalog::{Product, ProductPayload};
use serde_json::{json, Value};

use crate::error::{ClientError, ClientResult};

/// Whether a submit creates a new row or overwrites the one being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
  #[default]
  Create,
  Edit(i64),
}

/// Form fields exactly as a user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
  pub name: String,
  pub collection: String,
  pub scent_family: String,
  pub size_ml: String,
  pub price_thb: String,
  pub description: String,
  pub image_url: String,
}

impl ProductForm {
  /// Prefills the form for editing `product`.
  pub fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      collection: product.collection.clone(),
      scent_family: product.scent_family.clone(),
      size_ml: product.size_ml.to_string(),
      price_thb: product.price_thb.to_string(),
      description: product.description.clone(),
      image_url: product.image_url.clone(),
    }
  }

  /// Client-side checks, then numeric coercion into a request body.
  ///
  /// The service validates again; this only saves a round trip.
  pub fn to_payload(&self) -> ClientResult<ProductPayload> {
    let text = [&self.name, &self.collection, &self.scent_family];
    if text.iter().any(|v| v.trim().is_empty()) {
      return Err(ClientError::Form(
        "Name, Collection and Scent Family are required.".to_string(),
      ));
    }
    let (size, price) = match (coerce_number(&self.size_ml), coerce_number(&self.price_thb)) {
      (Some(size), Some(price)) => (size, price),
      _ => {
        return Err(ClientError::Form(
          "Size (ml) and Price (THB) must be numeric.".to_string(),
        ))
      }
    };

    Ok(ProductPayload {
      name: Some(Value::String(self.name.trim().to_string())),
      collection: Some(Value::String(self.collection.trim().to_string())),
      scent_family: Some(Value::String(self.scent_family.trim().to_string())),
      size_ml: Some(json!(size)),
      price_thb: Some(json!(price)),
      description: Some(Value::String(self.description.clone())),
      image_url: Some(Value::String(self.image_url.clone())),
    })
  }
}
