// core/src/model.rs

//! Row types for the `product` table.

use serde::{Deserialize, Serialize};

/// A catalog entry as stored. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub collection: String,
  pub scent_family: String,
  pub size_ml: f64,
  pub price_thb: f64,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub image_url: String,
}

/// Validated field set for an insert or a full overwrite.
///
/// Build one with [`crate::ProductPayload::validate`]; the fields are
/// crate-private so that an unvalidated draft can't reach a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
  pub(crate) name: String,
  pub(crate) collection: String,
  pub(crate) scent_family: String,
  pub(crate) size_ml: f64,
  pub(crate) price_thb: f64,
  pub(crate) description: String,
  pub(crate) image_url: String,
}

impl ProductDraft {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn collection(&self) -> &str {
    &self.collection
  }

  pub fn scent_family(&self) -> &str {
    &self.scent_family
  }

  pub fn size_ml(&self) -> f64 {
    self.size_ml
  }

  pub fn price_thb(&self) -> f64 {
    self.price_thb
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn image_url(&self) -> &str {
    &self.image_url
  }

  /// Materializes the draft as a row with the given id.
  pub fn into_product(self, id: i64) -> Product {
    Product {
      id,
      name: self.name,
      collection: self.collection,
      scent_family: self.scent_family,
      size_ml: self.size_ml,
      price_thb: self.price_thb,
      description: self.description,
      image_url: self.image_url,
    }
  }
}
