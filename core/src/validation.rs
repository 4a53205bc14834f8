// core/src/validation.rs

//! Turns a raw create/update body into a [`ProductDraft`].
//!
//! Fields are kept as loose JSON values: a client
//! may send `"size_ml": 50` or `"size_ml": "50"`, and the rejection message for
//! `"abc"` must come from here rather than from a deserializer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::error::{CatalogError, CatalogResult};
use crate::model::ProductDraft;

/// Raw JSON body of `POST /products` and `PUT /products/{id}`.
///
/// Only a JSON object deserializes into a payload; arrays and scalars are
/// rejected. Unknown keys (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPayload {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub collection: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scent_family: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size_ml: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price_thb: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<Value>,
}

impl<'de> Deserialize<'de> for ProductPayload {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    // `Map` only visits maps, so positional (array) input fails here.
    let fields = Map::<String, Value>::deserialize(deserializer)?;
    Ok(Self::from_object(fields))
  }
}

impl ProductPayload {
  /// Picks the known keys out of a JSON object.
  pub fn from_object(mut fields: Map<String, Value>) -> Self {
    Self {
      name: fields.remove("name"),
      collection: fields.remove("collection"),
      scent_family: fields.remove("scent_family"),
      size_ml: fields.remove("size_ml"),
      price_thb: fields.remove("price_thb"),
      description: fields.remove("description"),
      image_url: fields.remove("image_url"),
    }
  }

  /// Checks required fields, coerces numerics and fills optional defaults.
  ///
  /// Every missing required field is reported at once, in declaration order.
  #[instrument(name = "validation::product_payload", skip(self), err(Display))]
  pub fn validate(&self) -> CatalogResult<ProductDraft> {
    let required = [
      ("name", &self.name),
      ("collection", &self.collection),
      ("scent_family", &self.scent_family),
      ("size_ml", &self.size_ml),
      ("price_thb", &self.price_thb),
    ];
    let missing: Vec<&str> = required
      .iter()
      .filter(|(_, value)| !is_present(value))
      .map(|(field, _)| *field)
      .collect();
    if !missing.is_empty() {
      return Err(CatalogError::validation(format!(
        "Missing required field(s): {}",
        missing.join(", ")
      )));
    }

    let size_ml = required_number("size_ml", &self.size_ml)?;
    if size_ml <= 0.0 {
      return Err(CatalogError::validation("Field 'size_ml' must be greater than 0"));
    }
    let price_thb = required_number("price_thb", &self.price_thb)?;
    if price_thb < 0.0 {
      return Err(CatalogError::validation("Field 'price_thb' must not be negative"));
    }

    let draft = ProductDraft {
      name: required_text("name", &self.name)?,
      collection: required_text("collection", &self.collection)?,
      scent_family: required_text("scent_family", &self.scent_family)?,
      size_ml,
      price_thb,
      description: optional_text("description", &self.description)?,
      image_url: optional_text("image_url", &self.image_url)?,
    };
    debug!(name = %draft.name, "Payload accepted.");
    Ok(draft)
  }
}

/// Parses user input the way the numeric fields accept it: trimmed, finite decimal.
pub fn coerce_number(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_present(value: &Option<Value>) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::String(s)) => !s.trim().is_empty(),
    Some(_) => true,
  }
}

fn required_text(field: &str, value: &Option<Value>) -> CatalogResult<String> {
  match value {
    Some(Value::String(s)) => Ok(s.trim().to_string()),
    _ => Err(CatalogError::validation(format!("Field '{}' must be a string", field))),
  }
}

fn required_number(field: &str, value: &Option<Value>) -> CatalogResult<f64> {
  let parsed = match value {
    Some(Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()),
    Some(Value::String(s)) => coerce_number(s),
    _ => None,
  };
  parsed.ok_or_else(|| CatalogError::validation(format!("Field '{}' must be a number", field)))
}

fn optional_text(field: &str, value: &Option<Value>) -> CatalogResult<String> {
  match value {
    None | Some(Value::Null) => Ok(String::new()),
    Some(Value::String(s)) => Ok(s.trim().to_string()),
    Some(_) => Err(CatalogError::validation(format!("Field '{}' must be a string", field))),
  }
}
