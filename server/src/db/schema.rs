// server/src/db/schema.rs

use catalog::{ProductPayload, ProductStore};
use serde_json::json;
use sqlx::PgPool;
use tracing::{info, instrument};

use super::PgProductStore;
use crate::errors::{AppError, Result};

const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS product (
  id           BIGSERIAL PRIMARY KEY,
  name         TEXT NOT NULL,
  collection   TEXT NOT NULL,
  scent_family TEXT NOT NULL,
  size_ml      DOUBLE PRECISION NOT NULL,
  price_thb    DOUBLE PRECISION NOT NULL,
  description  TEXT NOT NULL DEFAULT '',
  image_url    TEXT NOT NULL DEFAULT ''
)
"#;

#[instrument(name = "schema::ensure", skip(pool), err(Display))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
  sqlx::query(CREATE_PRODUCT_TABLE).execute(pool).await?;
  info!("Table 'product' is present.");
  Ok(())
}

/// Sample rows inserted by `seed_if_empty`.
pub fn sample_payloads() -> Result<Vec<ProductPayload>> {
  [
    json!({
      "name": "Heritage Oud",
      "collection": "Heritage",
      "scent_family": "Woody",
      "size_ml": 50,
      "price_thb": 4500,
      "description": "Smoked agarwood softened by Thai jasmine."
    }),
    json!({
      "name": "Lumphini Morning",
      "collection": "Signature",
      "scent_family": "Green",
      "size_ml": 30,
      "price_thb": 2900,
      "description": "Cut grass, lotus leaf and a squeeze of lime."
    }),
    json!({
      "name": "Mango Sticky Rice",
      "collection": "Street Food",
      "scent_family": "Gourmand",
      "size_ml": 50,
      "price_thb": 3800,
      "description": "Ripe mango, coconut cream and toasted rice."
    }),
  ]
  .into_iter()
  .map(|value| {
    serde_json::from_value::<ProductPayload>(value)
      .map_err(|e| AppError::Internal(format!("Invalid sample perfume: {}", e)))
  })
  .collect()
}

/// Inserts the sample perfumes when the table has no rows. Returns how many were inserted.
#[instrument(name = "schema::seed_if_empty", skip(store), err(Display))]
pub async fn seed_if_empty(store: &PgProductStore) -> Result<usize> {
  let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
    .fetch_one(store.pool())
    .await?;
  if existing > 0 {
    info!(existing, "Skipping seed, table already has rows.");
    return Ok(0);
  }

  let mut inserted = 0;
  for payload in sample_payloads()? {
    let draft = payload.validate()?;
    store.insert(&draft).await?;
    inserted += 1;
  }
  info!(inserted, "Database seeded with sample perfumes.");
  Ok(inserted)
}
